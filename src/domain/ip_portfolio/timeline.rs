//! Filing and implementation schedule
//!
//! Patents are filed a month apart in table order and move through
//! publication and grant; trade secrets are implemented on a shorter stagger.

use super::assets;
use crate::domain::constants::ip::timeline;
use crate::domain::errors::FormulaError;
use chrono::{Days, NaiveDate};
use derive_more::Display;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum MilestoneEvent {
    Filing,
    Publication,
    Grant,
    Implementation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum MilestoneStatus {
    Planned,
    Future,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub key: &'static str,
    pub event: MilestoneEvent,
    pub date: NaiveDate,
    pub status: MilestoneStatus,
}

fn offset(start: NaiveDate, days: u64) -> Result<NaiveDate, FormulaError> {
    start
        .checked_add_days(Days::new(days))
        .ok_or_else(|| {
            FormulaError::invalid_input("start", "schedule runs past the last representable date")
        })
}

/// Schedule every asset starting from `start`
pub fn filing_timeline(start: NaiveDate) -> Result<Vec<Milestone>, FormulaError> {
    let mut milestones = Vec::new();

    for (index, asset) in assets().iter().enumerate() {
        let index = index as u64;

        if asset.protection.is_patent() {
            let filing = offset(start, index * timeline::PATENT_FILING_STAGGER_DAYS)?;
            milestones.push(Milestone {
                key: asset.key,
                event: MilestoneEvent::Filing,
                date: filing,
                status: MilestoneStatus::Planned,
            });
            milestones.push(Milestone {
                key: asset.key,
                event: MilestoneEvent::Publication,
                date: offset(filing, timeline::PUBLICATION_AFTER_FILING_DAYS)?,
                status: MilestoneStatus::Future,
            });
            milestones.push(Milestone {
                key: asset.key,
                event: MilestoneEvent::Grant,
                date: offset(filing, timeline::GRANT_AFTER_FILING_DAYS)?,
                status: MilestoneStatus::Future,
            });
        } else {
            milestones.push(Milestone {
                key: asset.key,
                event: MilestoneEvent::Implementation,
                date: offset(start, index * timeline::TRADE_SECRET_STAGGER_DAYS)?,
                status: MilestoneStatus::Planned,
            });
        }
    }

    Ok(milestones)
}
