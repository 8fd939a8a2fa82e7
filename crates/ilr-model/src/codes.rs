//! ILR code values.
//!
//! The ILR transmits most categorical fields as integer or short string
//! codes. Constants here name the codes the validation rules refer to.

/// `AimType` codes.
pub mod aim_type {
    pub const PROGRAMME_AIM: i32 = 1;
    pub const COMPONENT_AIM_IN_A_PROGRAMME: i32 = 3;
    pub const AIM_NOT_PART_OF_A_PROGRAMME: i32 = 4;
}

/// `FundModel` codes.
pub mod fund_model {
    pub const COMMUNITY_LEARNING: i32 = 10;
    pub const AGE_16_TO_19: i32 = 25;
    pub const ADULT_SKILLS: i32 = 35;
    pub const APPRENTICESHIPS: i32 = 36;
    pub const EUROPEAN_SOCIAL_FUND: i32 = 70;
    pub const OTHER_ADULT: i32 = 81;
    pub const OTHER_16_TO_19: i32 = 82;
    pub const NOT_FUNDED: i32 = 99;

    pub const ALL: &[i32] = &[
        COMMUNITY_LEARNING,
        AGE_16_TO_19,
        ADULT_SKILLS,
        APPRENTICESHIPS,
        EUROPEAN_SOCIAL_FUND,
        OTHER_ADULT,
        OTHER_16_TO_19,
        NOT_FUNDED,
    ];
}

/// `ProgType` codes.
pub mod prog_type {
    pub const ADVANCED_LEVEL_APPRENTICESHIP: i32 = 2;
    pub const INTERMEDIATE_LEVEL_APPRENTICESHIP: i32 = 3;
    pub const HIGHER_APPRENTICESHIP_LEVEL_4: i32 = 20;
    pub const HIGHER_APPRENTICESHIP_LEVEL_5: i32 = 21;
    pub const HIGHER_APPRENTICESHIP_LEVEL_6: i32 = 22;
    pub const HIGHER_APPRENTICESHIP_LEVEL_7_PLUS: i32 = 23;
    pub const TRAINEESHIP: i32 = 24;
    pub const APPRENTICESHIP_STANDARD: i32 = 25;
    pub const T_LEVEL_TRANSITION: i32 = 30;
    pub const T_LEVEL: i32 = 31;

    /// Framework-based apprenticeships (carry a pathway code).
    pub const FRAMEWORKS: &[i32] = &[
        ADVANCED_LEVEL_APPRENTICESHIP,
        INTERMEDIATE_LEVEL_APPRENTICESHIP,
        HIGHER_APPRENTICESHIP_LEVEL_4,
        HIGHER_APPRENTICESHIP_LEVEL_5,
        HIGHER_APPRENTICESHIP_LEVEL_6,
        HIGHER_APPRENTICESHIP_LEVEL_7_PLUS,
    ];

    pub const ALL: &[i32] = &[
        ADVANCED_LEVEL_APPRENTICESHIP,
        INTERMEDIATE_LEVEL_APPRENTICESHIP,
        HIGHER_APPRENTICESHIP_LEVEL_4,
        HIGHER_APPRENTICESHIP_LEVEL_5,
        HIGHER_APPRENTICESHIP_LEVEL_6,
        HIGHER_APPRENTICESHIP_LEVEL_7_PLUS,
        TRAINEESHIP,
        APPRENTICESHIP_STANDARD,
        T_LEVEL_TRANSITION,
        T_LEVEL,
    ];
}

/// `CompStatus` codes.
pub mod comp_status {
    pub const CONTINUING: i32 = 1;
    pub const COMPLETED: i32 = 2;
    pub const WITHDRAWN: i32 = 3;
}

/// `AFinType` codes and their valid `AFinCode` values.
pub mod afin_type {
    /// Total negotiated price.
    pub const TNP: &str = "TNP";
    /// Payment record.
    pub const PMR: &str = "PMR";

    pub const TNP_CODES: &[i32] = &[1, 2, 3, 4];
    pub const PMR_CODES: &[i32] = &[1, 2, 3];

    /// TNP code for the total training price.
    pub const TOTAL_TRAINING_PRICE: i32 = 1;
    /// TNP code for the total assessment price.
    pub const TOTAL_ASSESSMENT_PRICE: i32 = 2;
    /// TNP code for the residual training price.
    pub const RESIDUAL_TRAINING_PRICE: i32 = 3;
    /// TNP code for the residual assessment price.
    pub const RESIDUAL_ASSESSMENT_PRICE: i32 = 4;
}

/// `LearnDelFAMType` codes and their valid `LearnDelFAMCode` values.
pub mod fam_type {
    /// Source of funding.
    pub const SOF: &str = "SOF";
    /// Full or co-funding indicator.
    pub const FFI: &str = "FFI";
    /// Restart indicator.
    pub const RES: &str = "RES";
    /// Apprenticeship contract type.
    pub const ACT: &str = "ACT";
    /// Learning delivery monitoring.
    pub const LDM: &str = "LDM";
    /// Advanced learner loans indicator.
    pub const ADL: &str = "ADL";
    /// Advanced learner loans bursary funding.
    pub const ALB: &str = "ALB";
    /// Learning support funding.
    pub const LSF: &str = "LSF";

    pub const SOF_CODES: &[&str] = &[
        "1", "105", "107", "108", "110", "111", "112", "113", "114", "115", "116",
    ];
    pub const FFI_CODES: &[&str] = &["1", "2"];
    pub const RES_CODES: &[&str] = &["1"];
    pub const ACT_CODES: &[&str] = &["1", "2"];
    pub const LDM_CODES: &[&str] = &[
        "034", "328", "347", "356", "361", "363", "367", "376", "378", "379",
    ];
    pub const ADL_CODES: &[&str] = &["1"];
    pub const ALB_CODES: &[&str] = &["1", "2", "3"];
    pub const LSF_CODES: &[&str] = &["1"];

    /// FAM types that may be returned at most once per learning delivery.
    pub const NON_REPEATABLE: &[&str] = &[SOF, FFI, RES, ADL];
}

/// `PriorAttain` codes.
pub mod prior_attain {
    pub const ALL: &[i32] = &[2, 3, 4, 5, 7, 9, 10, 11, 12, 13, 97, 99];
}

/// `EmpStat` codes.
pub mod emp_stat {
    pub const IN_PAID_EMPLOYMENT: i32 = 10;

    pub const ALL: &[i32] = &[IN_PAID_EMPLOYMENT, 11, 12, 98];
}

/// `WithdrawReason` codes.
pub mod withdraw_reason {
    pub const ALL: &[i32] = &[2, 3, 7, 28, 29, 40, 41, 42, 43, 44, 45, 46, 47, 97, 98];
}
