//! # campaign-service
//!
//! Application layer: reaction submission and withdrawal with the verification
//! flag refresh, the admin verification workflow, and campaign lifecycle.

pub mod dto;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use services::{
    CampaignService, ReactionService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, VerificationService,
};
