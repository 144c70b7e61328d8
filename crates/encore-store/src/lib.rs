//! # encore-store: Storage Boundary for Encore
//!
//! This crate provides the storage-collaborator seam around the pure
//! financial engine, and the services that orchestrate it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Encore Data Flow                                 │
//! │                                                                         │
//! │  Report / reconciliation endpoint                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    encore-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌─────────────┐  │   │
//! │  │   │   GigStore    │    │ MemoryGigStore │    │ReportService│  │   │
//! │  │   │   (trait)     │◄───│ (ref impl +    │◄───│ period →    │  │   │
//! │  │   │               │    │  test double)  │    │ filter →    │  │   │
//! │  │   │ real storage  │    │                │    │ aggregate   │  │   │
//! │  │   │ plugs in here │    │                │    │             │  │   │
//! │  │   └───────────────┘    └────────────────┘    └─────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  encore-core: calculate() / aggregate()  (pure, no I/O)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - `GigStore` trait and the in-memory reference implementation
//! - [`service`] - `ReportService`: report, reconciliation, member linking,
//!   bulk settlement
//! - [`error`] - Storage boundary error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use encore_core::ReportPeriod;
//! use encore_store::{GigStore, MemoryGigStore, ReportService};
//!
//! let service = ReportService::new(MemoryGigStore::new());
//! service.store().insert(gig).await?;
//!
//! let report = service.financial_report("manager-1", ReportPeriod::Quarter).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod service;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use service::{MemberShare, ReportService};
pub use store::{GigStore, MemoryGigStore};
