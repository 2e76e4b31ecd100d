//! In-tree test doubles for the external collaborators.
//!
//! Both mocks are plain entry functions; integration tests wrap them with
//! `cw_multi_test::ContractWrapper`. They implement the interfaces in
//! [`crate::endpoint`] and [`crate::custody`] plus a few extra knobs for
//! steering failure modes and inspecting recorded traffic.

pub mod mock_custody;
pub mod mock_endpoint;
