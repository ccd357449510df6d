#[cfg(test)]
mod common;

#[cfg(test)]
mod access_guard_tests;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod requirement_status_tests;

#[cfg(test)]
mod auction_query_tests;

#[cfg(test)]
mod bid_window_tests;

#[cfg(test)]
mod validation_tests;
