//! End-to-end menu scenarios: scripted input in, transcript out.

mod helpers;
mod test_check_in;
mod test_check_out;
mod test_invalid_input;
mod test_load_and_list;
mod test_sorting;
