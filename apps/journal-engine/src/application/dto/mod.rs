//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for API boundaries and use case inputs/outputs.

mod journal_dto;

pub use journal_dto::{
    ComputeStatsRequestDto, DashboardQuery, DashboardReport, ImportTradesRequestDto,
    ImportTradesResponseDto,
};
