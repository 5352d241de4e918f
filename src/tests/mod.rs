mod router_tests;
mod storage_tests;
mod utils;
