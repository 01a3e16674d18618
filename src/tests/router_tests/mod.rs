mod api_tests;
mod predict_tests;
