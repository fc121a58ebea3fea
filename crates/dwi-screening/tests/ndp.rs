use dwi_core::models::category::NdpCategory;
use dwi_core::models::screening::ScreeningInput;
use dwi_screening::scoring::{RuleTally, classify, mast_score, tally};
use dwi_screening::{Score, ScreeningResult, score};

fn text(s: &str) -> Option<String> {
    Some(s.to_string())
}

/// MAST answers matching the key for the first `n` of questions 14–30.
fn mast_hits(n: i64) -> ScreeningInput {
    (14..14 + n).fold(ScreeningInput::default(), |input, q| input.with_mast(q, "yes"))
}

#[test]
fn absent_screening_scores_to_none() {
    assert_eq!(score(None), None);
}

#[test]
fn empty_screening_is_no_problem() {
    let result = score(Some(&ScreeningInput::default())).unwrap();
    assert_eq!(
        result,
        ScreeningResult {
            mast_score: 0,
            category: NdpCategory::NoProblem,
            ndp_score: 1,
        }
    );
}

#[test]
fn mast_matching_is_case_insensitive_and_keyed_per_question() {
    let input = ScreeningInput::default()
        .with_mast(7, "yes")
        .with_mast(8, "YES")
        .with_mast(9, "no");
    assert_eq!(mast_score(&input), 3);
}

#[test]
fn mast_answer_against_the_key_does_not_count() {
    // Questions 6 and 9 expect NO.
    let input = ScreeningInput::default()
        .with_mast(6, "yes")
        .with_mast(9, "YES")
        .with_mast(11, " no ");
    assert_eq!(mast_score(&input), 1);
}

#[test]
fn mast_answers_outside_6_to_30_are_ignored() {
    let input = ScreeningInput::default()
        .with_mast(5, "yes")
        .with_mast(31, "yes")
        .with_mast(0, "no")
        .with_mast(-7, "yes");
    assert_eq!(mast_score(&input), 0);
}

#[test]
fn full_key_match_scores_25() {
    let input = dwi_screening::answer_key::entries().fold(
        ScreeningInput::default(),
        |input, (q, answer)| input.with_mast(q.into(), answer.as_str().to_lowercase()),
    );
    assert_eq!(mast_score(&input), 25);
}

#[test]
fn single_evident_rule_scores_6() {
    let input = ScreeningInput {
        q1: Some(3),
        ..Default::default()
    };
    let result = input.score();
    assert_eq!(result.category, NdpCategory::EvidentProblem);
    assert_eq!(result.ndp_score, 6);
}

#[test]
fn two_evident_rules_score_7() {
    let input = ScreeningInput {
        q1: Some(2),
        q5: text("yes"),
        ..Default::default()
    };
    assert_eq!(tally(&input, 0).evident, 2);
    assert_eq!(input.score().ndp_score, 7);
}

#[test]
fn all_three_evident_rules_still_score_7() {
    let mut input = mast_hits(7);
    input.q1 = Some(5);
    input.q5 = text("Yes");
    let result = input.score();
    assert_eq!(result.mast_score, 7);
    assert_eq!(result.ndp_score, 7);
}

#[test]
fn potential_tier_steps_with_rule_count() {
    let one = ScreeningInput {
        q2: text("yes"),
        ..Default::default()
    };
    assert_eq!(one.score().category, NdpCategory::PotentialProblem);
    assert_eq!(one.score().ndp_score, 2);

    let two = ScreeningInput {
        q2: text("yes"),
        q4: text("yes"),
        ..Default::default()
    };
    assert_eq!(two.score().ndp_score, 3);

    let three = ScreeningInput {
        q3: text("stranger"),
        ..two.clone()
    };
    assert_eq!(three.score().ndp_score, 4);
}

#[test]
fn potential_counts_above_four_cap_at_5() {
    let four = ScreeningInput {
        q1: Some(1),
        q2: text("yes"),
        q3: text("alone"),
        q4: text("not sure"),
        ..Default::default()
    };
    assert_eq!(tally(&four, 0).potential, 4);
    assert_eq!(four.score().ndp_score, 5);

    let mut six = mast_hits(5);
    six.q1 = Some(1);
    six.q2 = text("yes");
    six.q3 = text("ALONE");
    six.q4 = text("yes");
    six.q5 = text("not sure");
    assert_eq!(tally(&six, mast_score(&six)).potential, 6);
    assert_eq!(
        six.score(),
        ScreeningResult {
            mast_score: 5,
            category: NdpCategory::PotentialProblem,
            ndp_score: 5,
        }
    );

    assert_eq!(
        classify(RuleTally {
            evident: 0,
            potential: 5,
            no_problem: 0,
        }),
        (NdpCategory::PotentialProblem, 5)
    );
}

#[test]
fn evident_rule_wins_over_other_tiers() {
    let input = ScreeningInput {
        q2: text("no"),
        q4: text("yes"),
        q5: text("yes"),
        ..Default::default()
    };
    let counts = tally(&input, 0);
    assert_eq!(counts.evident, 1);
    assert_eq!(counts.potential, 1);
    assert_eq!(counts.no_problem, 2);
    assert_eq!(input.score().category, NdpCategory::EvidentProblem);
}

#[test]
fn no_problem_rules_do_not_raise_the_score() {
    let input = ScreeningInput {
        q1: Some(0),
        q2: text("no"),
        ..Default::default()
    }
    .with_mast(7, "yes")
    .with_mast(8, "yes");

    assert_eq!(tally(&input, 2).no_problem, 3);
    assert_eq!(
        input.score(),
        ScreeningResult {
            mast_score: 2,
            category: NdpCategory::NoProblem,
            ndp_score: 1,
        }
    );
}

#[test]
fn mast_bands_split_at_3_4_and_6_7() {
    assert_eq!(mast_hits(3).score().category, NdpCategory::NoProblem);
    assert_eq!(mast_hits(4).score().category, NdpCategory::PotentialProblem);
    assert_eq!(mast_hits(4).score().ndp_score, 2);
    assert_eq!(mast_hits(6).score().category, NdpCategory::PotentialProblem);
    assert_eq!(mast_hits(7).score().category, NdpCategory::EvidentProblem);
    assert_eq!(mast_hits(7).score().ndp_score, 6);
}

#[test]
fn absent_q1_is_not_zero() {
    let absent = ScreeningInput::default();
    let zero = ScreeningInput {
        q1: Some(0),
        ..Default::default()
    };
    assert_eq!(tally(&absent, 0).no_problem, 1);
    assert_eq!(tally(&zero, 0).no_problem, 2);
}

#[test]
fn answers_are_trimmed_before_comparison() {
    let input = ScreeningInput {
        q3: text("  Stranger\t"),
        ..Default::default()
    };
    assert_eq!(input.score().ndp_score, 2);
}

#[test]
fn unrecognized_answers_match_nothing() {
    let input = ScreeningInput {
        q2: text("maybe"),
        q3: text("friends"),
        q4: text("no"),
        q5: text("no"),
        ..Default::default()
    };
    assert_eq!(tally(&input, 0), RuleTally {
        evident: 0,
        potential: 0,
        no_problem: 1,
    });
}

#[test]
fn scoring_twice_gives_identical_results() {
    let input = ScreeningInput {
        q1: Some(1),
        q4: text("not sure"),
        ..Default::default()
    }
    .with_mast(10, "yes");

    let first = score(Some(&input));
    let second = score(Some(&input));
    assert_eq!(first, second);
}

#[test]
fn wire_shape_scores_end_to_end() {
    let input: Option<ScreeningInput> = serde_json::from_str("null").unwrap();
    assert_eq!(score(input.as_ref()), None);

    let input: Option<ScreeningInput> = serde_json::from_str(
        r#"{ "q1": 0, "q2": "no", "mast_q6_30": { "-1": "yes", "7": "yes", "8": "yes" } }"#,
    )
    .unwrap();
    let result = score(input.as_ref()).unwrap();
    assert_eq!(result.mast_score, 2);
    assert_eq!(result.ndp_score, 1);
}

#[test]
fn result_serializes_with_camel_case_fields() {
    let result = ScreeningInput {
        q5: text("yes"),
        ..Default::default()
    }
    .score();
    let value = serde_json::to_value(result).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "mastScore": 0,
            "category": "Evident Problem",
            "ndpScore": 6
        })
    );
}
