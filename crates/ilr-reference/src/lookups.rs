//! Static ILR code lists.

use ilr_model::codes::{
    afin_type, emp_stat, fam_type, fund_model, prior_attain, prog_type, withdraw_reason,
};

use crate::services::LookupDataService;

/// Single-valued code lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKey {
    FundModel,
    ProgType,
    PriorAttain,
    EmpStat,
    WithdrawReason,
}

/// Code lists keyed by a type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupPairKey {
    /// `AFinType` with its `AFinCode`.
    AppFinTypeCode,
    /// `LearnDelFAMType` with its `LearnDelFAMCode`.
    LearnDelFamTypeCode,
}

/// Lookups compiled from the ILR code constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticLookups;

impl StaticLookups {
    pub fn new() -> Self {
        Self
    }

    fn afin_codes(type_code: &str) -> Option<&'static [i32]> {
        let type_code = type_code.trim();
        if type_code.eq_ignore_ascii_case(afin_type::TNP) {
            Some(afin_type::TNP_CODES)
        } else if type_code.eq_ignore_ascii_case(afin_type::PMR) {
            Some(afin_type::PMR_CODES)
        } else {
            None
        }
    }

    fn fam_codes(type_code: &str) -> Option<&'static [&'static str]> {
        const TABLE: &[(&str, &[&str])] = &[
            (fam_type::SOF, fam_type::SOF_CODES),
            (fam_type::FFI, fam_type::FFI_CODES),
            (fam_type::RES, fam_type::RES_CODES),
            (fam_type::ACT, fam_type::ACT_CODES),
            (fam_type::LDM, fam_type::LDM_CODES),
            (fam_type::ADL, fam_type::ADL_CODES),
            (fam_type::ALB, fam_type::ALB_CODES),
            (fam_type::LSF, fam_type::LSF_CODES),
        ];
        let type_code = type_code.trim();
        TABLE
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(type_code))
            .map(|(_, codes)| *codes)
    }
}

impl LookupDataService for StaticLookups {
    fn contains(&self, key: LookupKey, code: i32) -> bool {
        let codes = match key {
            LookupKey::FundModel => fund_model::ALL,
            LookupKey::ProgType => prog_type::ALL,
            LookupKey::PriorAttain => prior_attain::ALL,
            LookupKey::EmpStat => emp_stat::ALL,
            LookupKey::WithdrawReason => withdraw_reason::ALL,
        };
        codes.contains(&code)
    }

    fn contains_pair(&self, key: LookupPairKey, type_code: &str, code: &str) -> bool {
        let code = code.trim();
        match key {
            LookupPairKey::AppFinTypeCode => match (Self::afin_codes(type_code), code.parse::<i32>()) {
                (Some(codes), Ok(code)) => codes.contains(&code),
                _ => false,
            },
            LookupPairKey::LearnDelFamTypeCode => {
                Self::fam_codes(type_code).is_some_and(|codes| codes.contains(&code))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_lookups_ignore_type_case() {
        let lookups = StaticLookups::new();
        assert!(lookups.contains_pair(LookupPairKey::AppFinTypeCode, "tnp", "4"));
        assert!(!lookups.contains_pair(LookupPairKey::AppFinTypeCode, "PMR", "4"));
        assert!(lookups.contains_pair(LookupPairKey::LearnDelFamTypeCode, "ldm", "034"));
        assert!(!lookups.contains_pair(LookupPairKey::LearnDelFamTypeCode, "LDM", "34"));
        assert!(!lookups.contains_pair(LookupPairKey::LearnDelFamTypeCode, "XYZ", "1"));
    }

    #[test]
    fn single_lookups_cover_code_lists() {
        let lookups = StaticLookups::new();
        assert!(lookups.contains(LookupKey::FundModel, 36));
        assert!(!lookups.contains(LookupKey::FundModel, 37));
        assert!(lookups.contains(LookupKey::ProgType, 25));
        assert!(!lookups.contains(LookupKey::PriorAttain, 1));
    }
}
