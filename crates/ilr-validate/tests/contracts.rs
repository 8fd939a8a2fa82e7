//! Contract reference and subcontracting partner rules.

mod common;

use common::{UKPRN, delivery, fcs, file_data, learner, organisations, run};
use ilr_validate::checks::{
    ConRefNumber01, ConRefNumber02, ConRefNumber03, PartnerUkprn01, PartnerUkprn02,
};

#[test]
fn con_ref_number_01_requires_contract_on_esf_aims() {
    let missing = delivery(1, 4, 70);
    let mut blank = delivery(2, 4, 70);
    blank.con_ref_number = Some("  ".to_string());
    let mut present = delivery(3, 4, 70);
    present.con_ref_number = Some("ESF-2234".to_string());

    let raised = run(&ConRefNumber01::new(), &learner(vec![missing, blank, present]));

    let aims: Vec<_> = raised.iter().map(|e| e.aim_seq_number).collect();
    assert_eq!(aims, vec![Some(1), Some(2)]);
    assert_eq!(raised[1].parameter("ConRefNumber"), Some(""));
    assert_eq!(raised[1].parameter("FundModel"), Some("70"));
}

#[test]
fn con_ref_number_02_rejects_contract_on_other_funding() {
    let rule = ConRefNumber02::new();

    assert!(rule.condition_met(35, Some("ESF-2234")));
    assert!(!rule.condition_met(70, Some("ESF-2234")));
    assert!(!rule.condition_met(35, None));
}

#[test]
fn con_ref_number_03_requires_allocation_held_by_provider() {
    let rule = ConRefNumber03::new(fcs(), file_data());

    assert!(!rule.condition_met(Some("ESF-2234")));
    assert!(!rule.condition_met(Some("esf-2234")));
    assert!(rule.condition_met(Some("ESF-7741")));
    assert!(rule.condition_met(Some("ESF-0000")));
    assert!(!rule.condition_met(None));

    let mut foreign = delivery(1, 4, 70);
    foreign.con_ref_number = Some(" ESF-7741 ".to_string());
    let raised = run(&rule, &learner(vec![foreign]));
    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].parameter("ConRefNumber"), Some("ESF-7741"));
}

#[test]
fn partner_ukprn_01_requires_known_organisation() {
    let rule = PartnerUkprn01::new(organisations());

    assert!(rule.condition_met(Some(99999999)));
    assert!(!rule.condition_met(Some(10000002)));
    assert!(!rule.condition_met(None));
}

#[test]
fn partner_ukprn_02_rejects_self_subcontracting() {
    let mut own = delivery(1, 4, 35);
    own.partner_ukprn = Some(UKPRN);
    let mut partner = delivery(2, 4, 35);
    partner.partner_ukprn = Some(10000002);

    let raised = run(&PartnerUkprn02::new(file_data()), &learner(vec![own, partner]));

    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].parameter("PartnerUKPRN"), Some("10000001"));
    assert_eq!(raised[0].parameter("UKPRN"), Some("10000001"));
}
