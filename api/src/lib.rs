//! REST client for the Alignly backend (aligners, treatments, wear tracking,
//! story chapters). The backend owns all state transitions; this crate only
//! reads, and posts the handful of actions the product exposes.

pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use models::{
    Aligner, AlignerStatus, Celebration, CheckInRequest, StoryChapter, Treatment,
    TreatmentStatus, WearDaily, WearDayStatus, WearState, WearStatusResponse, WearWeek,
};
