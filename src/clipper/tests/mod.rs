mod intersect_node_tests;
mod out_rec_tests;
mod scanbeam_tests;
