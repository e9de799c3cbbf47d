mod channel_tests;
mod search_flow_tests;
