//! Packed polygon layout shared with JS:
//! `[m, offset_0, .., offset_{m-1}, x0, y0, x1, y1, ..]`, offsets are relative
//! to the start of the coordinate section.

use crate::constants::MEM_SEG_HEADER;
use crate::error::MemSegError;
use crate::geometry::contour::Contour;
use crate::geometry::point::Point;
use crate::geometry::polygon::Polygon;
use crate::utils::number::Number;

pub fn pack_polygon<T: Number>(polygon: &Polygon<T>) -> Vec<T> {
    let contours = polygon.contours();
    let m = contours.len();
    let total_points: usize = contours.iter().map(|contour| contour.len()).sum();
    let header_len = MEM_SEG_HEADER + m;
    let total_len = header_len + total_points * 2;

    let mut out = Vec::with_capacity(total_len);
    out.push(from_usize(m));

    let mut running: usize = 0;
    for contour in contours {
        out.push(from_usize(running));
        running += contour.len() * 2;
    }

    for contour in contours {
        for point in contour.points() {
            out.push(point.x);
            out.push(point.y);
        }
    }

    debug_assert_eq!(out.len(), total_len);
    out
}

pub fn unpack_polygon<T: Number>(mem_seg: &[T]) -> Result<Polygon<T>, MemSegError> {
    let raw_count = *mem_seg.first().ok_or(MemSegError::Empty)?;
    let count = to_index(raw_count).ok_or(MemSegError::InvalidCount(to_f64(raw_count)))?;
    let header_len = MEM_SEG_HEADER + count;

    if mem_seg.len() < header_len {
        return Err(MemSegError::TruncatedHeader {
            expected: header_len,
            actual: mem_seg.len(),
        });
    }

    let data = &mem_seg[header_len..];
    let offsets = read_offsets(&mem_seg[MEM_SEG_HEADER..header_len], data.len())?;
    let mut polygon = Polygon::new();

    for (contour, &start) in offsets.iter().enumerate() {
        let end = offsets.get(contour + 1).copied().unwrap_or(data.len());
        let coords = &data[start..end];

        if coords.len() % 2 != 0 {
            return Err(MemSegError::OddCoordinates {
                contour,
                len: coords.len(),
            });
        }

        polygon.add_contour(from_flat(coords));
    }

    Ok(polygon)
}

/// Single contour from `[x0, y0, x1, y1, ..]`; a dangling coordinate is ignored.
pub fn from_flat<T: Number>(coords: &[T]) -> Contour<T> {
    Contour::new(
        coords
            .chunks_exact(2)
            .map(|chunk| Point::new(chunk[0], chunk[1]))
            .collect(),
    )
}

fn read_offsets<T: Number>(header: &[T], data_len: usize) -> Result<Vec<usize>, MemSegError> {
    let mut offsets = Vec::with_capacity(header.len());
    let mut previous = 0;

    for (contour, &raw) in header.iter().enumerate() {
        let offset = to_index(raw)
            .filter(|&offset| offset >= previous && offset <= data_len)
            .ok_or(MemSegError::InvalidOffset {
                contour,
                offset: to_f64(raw),
                data_len,
            })?;

        offsets.push(offset);
        previous = offset;
    }

    Ok(offsets)
}

fn to_index<T: Number>(value: T) -> Option<usize> {
    if value.fract() != T::zero() {
        return None;
    }

    value.to_usize()
}

fn to_f64<T: Number>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

fn from_usize<T: Number>(value: usize) -> T {
    T::from_usize(value).unwrap_or_else(T::zero)
}
