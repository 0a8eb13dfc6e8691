//! Biyuya admin dashboard
//!
//! Page controllers for the admin dashboard tabs. Each page issues its
//! analytics queries concurrently and resolves to a complete snapshot or an
//! error; rendering is a pure function of the snapshot.

pub mod pages;
pub mod render;

pub use pages::{
    resolve, FinancePage, OperationsPage, OverviewPage, PageState, ProductUsagePage, UsersPage,
};
