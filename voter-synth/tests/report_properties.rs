use voter_synth::{
    CampaignDemographicsReport, ElectionCycle, EngagementTier, GeneratorConfig, MAX_AGE, MIN_AGE,
    PopulationError, PopulationRequest, ProfileGenerator, RegistrationStatus, Stance, aggregate,
    age_to_bracket, age_to_generation, generate_batch, generate_for_participants,
};

fn batch(campaign: &str, count: i64, seed: u64) -> CampaignDemographicsReport {
    let generator = ProfileGenerator::new(GeneratorConfig::default_config().with_seed(seed));
    let request = PopulationRequest::new(campaign, count).expect("valid request");
    aggregate(request.campaign_id(), &generate_batch(&generator, &request))
}

#[test]
fn percentages_stay_in_range_across_seeds() {
    for seed in [1_u64, 7, 1337, 0xC0FFEE] {
        let report = batch("range", 500, seed);
        let scalars = [
            report.verified_voter_pct,
            report.stance.support_pct,
            report.stance.oppose_pct,
            report.household.homeowner_pct,
            report.household.children_present_pct,
            report.household.veteran_in_household_pct,
            report.turnout.average_general_pct,
            report.engagement.high_pct,
            report.engagement.medium_pct,
            report.engagement.low_pct,
        ];
        assert!(scalars.iter().all(|pct| *pct <= 100), "seed {seed}: {scalars:?}");
        for (name, dimension) in report.demographics.dimensions() {
            let sum: u32 = dimension.values().sum();
            let tolerance = u32::try_from(dimension.len()).expect("dimension size fits");
            assert!(sum.abs_diff(100) <= tolerance, "seed {seed}: {name} sums to {sum}");
        }
    }
}

#[test]
fn empty_report_serializes_every_field_as_zero() {
    let report = aggregate("nobody", &[]);
    let value = serde_json::to_value(&report).expect("serialize report");
    let mut stack = vec![value];
    let mut numbers = 0;
    while let Some(node) = stack.pop() {
        match node {
            serde_json::Value::Object(map) => stack.extend(map.into_iter().map(|(_, v)| v)),
            serde_json::Value::Number(number) => {
                numbers += 1;
                assert_eq!(number.as_u64(), Some(0));
            }
            serde_json::Value::String(label) => assert_eq!(label, "nobody"),
            other => panic!("unexpected value in empty report: {other}"),
        }
    }
    assert!(numbers > 80, "only {numbers} numeric fields");
}

#[test]
fn recent_general_turnout_tracks_configured_rates() {
    let report = batch("turnout", 20_000, 99);
    let presidential = report.turnout.general["general_2024"];
    let midterm = report.turnout.general["general_2022"];
    let primary = report.turnout.primary["primary_2022"];
    assert!((72..=78).contains(&presidential), "presidential {presidential}");
    assert!((57..=63).contains(&midterm), "midterm {midterm}");
    assert!((22..=28).contains(&primary), "primary {primary}");
    assert!(presidential > midterm && midterm > primary);
}

#[test]
fn verified_rate_follows_registration_overrides() {
    let generator = ProfileGenerator::default();
    let participants: Vec<(String, Stance)> = (0..100)
        .map(|idx| (format!("member-{idx}"), Stance::Support))
        .collect();
    let mut records = generate_for_participants(&generator, &participants).expect("valid input");
    for record in &mut records {
        record.profile.registration_status = RegistrationStatus::Active;
    }
    assert_eq!(aggregate("active", &records).verified_voter_pct, 100);

    for record in records.iter_mut().take(25) {
        record.profile.registration_status = RegistrationStatus::Inactive;
    }
    let report = aggregate("active", &records);
    assert_eq!(report.verified_voters, 75);
    assert_eq!(report.verified_voter_pct, 75);
}

#[test]
fn classifiers_are_total_over_the_age_domain() {
    for age in MIN_AGE..=MAX_AGE {
        let (low, high) = age_to_bracket(age).span();
        assert!(low <= age && age <= high);
        let _ = age_to_generation(age);
    }
}

#[test]
fn same_identity_same_seed_same_profile() {
    let first = ProfileGenerator::new(GeneratorConfig::default_config().with_seed(5));
    let second = ProfileGenerator::new(GeneratorConfig::default_config().with_seed(5));
    let other = ProfileGenerator::new(GeneratorConfig::default_config().with_seed(6));
    assert_eq!(first.generate("user-42"), second.generate("user-42"));
    let differs = (0..20).any(|idx| {
        let identity = format!("user-{idx}");
        first.generate(&identity) != other.generate(&identity)
    });
    assert!(differs, "different seeds should change at least one profile");
}

#[test]
fn user_42_history_has_exactly_the_tracked_cycles() {
    let profile = ProfileGenerator::default().generate("user-42");
    let mut keys: Vec<String> = profile.election_history.iter().map(|(c, _)| c.key()).collect();
    keys.sort();
    let mut expected: Vec<String> = ElectionCycle::ALL.iter().map(|c| c.key()).collect();
    expected.sort();
    assert_eq!(keys, expected);
    assert!(matches!(
        profile.engagement,
        EngagementTier::High | EngagementTier::Medium | EngagementTier::Low
    ));
}

#[test]
fn invalid_requests_fail_fast() {
    assert_eq!(
        PopulationRequest::new("bill", -10).unwrap_err(),
        PopulationError::NegativeCount { requested: -10 }
    );
    assert!(PopulationRequest::new("", 10).is_err());
}
