//! Filter tests.
//!
//! Organized by concern:
//! - display_tests: SGR code dispatch and tag rendering
//! - stream_tests: incremental feeding, setup/teardown and chunk boundaries
