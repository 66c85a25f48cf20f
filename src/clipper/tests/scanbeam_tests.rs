use crate::clipper::scanbeam::Scanbeam;
use serde_json::Value;

const TEST_DATA: &str = include_str!("../../__data__/scanbeam.json");

struct TestCase {
    id: String,
    values: Vec<f64>,
    expected_values: Vec<f64>,
    expected_added: Vec<bool>,
}

fn as_f64_list(value: Option<&Value>) -> Vec<f64> {
    value
        .and_then(|v| v.as_array())
        .map(|arr| arr.iter().filter_map(|x| x.as_f64()).collect())
        .unwrap_or_default()
}

fn parse_test_data(json_content: &str) -> Vec<TestCase> {
    let data: Value = serde_json::from_str(json_content).expect("Failed to parse JSON");
    let mut test_cases = Vec::new();

    for suite in data["suites"].as_array().into_iter().flatten() {
        for case in suite["data"].as_array().into_iter().flatten() {
            test_cases.push(TestCase {
                id: case["id"].as_str().unwrap_or("unknown").to_string(),
                values: as_f64_list(case.get("input").and_then(|i| i.get("values"))),
                expected_values: as_f64_list(case.get("output").and_then(|o| o.get("values"))),
                expected_added: case["output"]["added"]
                    .as_array()
                    .map(|arr| arr.iter().filter_map(|x| x.as_bool()).collect())
                    .unwrap_or_default(),
            });
        }
    }

    test_cases
}

#[test]
fn test_scanbeam_from_json_data() {
    let test_cases = parse_test_data(TEST_DATA);

    assert!(!test_cases.is_empty());

    for test_case in test_cases {
        let mut scanbeam = Scanbeam::<f64>::new();
        let added: Vec<bool> = test_case
            .values
            .iter()
            .map(|&y| scanbeam.add(y))
            .collect();

        assert_eq!(added, test_case.expected_added, "{}", test_case.id);
        assert_eq!(scanbeam.build(), test_case.expected_values, "{}", test_case.id);
        assert_eq!(scanbeam.len(), test_case.expected_values.len(), "{}", test_case.id);
    }
}

#[test]
fn test_clear_resets_tree() {
    let mut scanbeam = Scanbeam::<f32>::new();

    scanbeam.add(1.0);
    scanbeam.add(2.0);
    scanbeam.clear();

    assert!(scanbeam.is_empty());
    assert!(scanbeam.add(2.0));
    assert_eq!(scanbeam.build(), vec![2.0]);
}

#[test]
fn test_degenerate_insert_order_stays_sorted() {
    let mut scanbeam = Scanbeam::<f64>::new();

    for y in (0..500).rev() {
        scanbeam.add(y as f64);
    }

    let built = scanbeam.build();

    assert_eq!(built.len(), 500);
    assert!(built.windows(2).all(|pair| pair[0] < pair[1]));
}
