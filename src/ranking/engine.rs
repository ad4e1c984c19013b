use crate::data::CrewRecord;

/// Score used for sorting; absent and NaN scores sort after every real score.
fn sort_key(score: Option<f64>) -> f64 {
    match score {
        Some(value) if !value.is_nan() => value,
        _ => f64::NEG_INFINITY,
    }
}

fn qualifies(score: Option<f64>) -> bool {
    matches!(score, Some(value) if value.is_finite() && value > 0.0)
}

/// Rank the roster by `scoring`, writing 1-based positions under `field`.
///
/// The sort is stable and descending on score alone, so equal scores keep
/// roster order. Only crew with a finite positive score receive the field.
pub fn rank_by<F>(roster: &mut [CrewRecord], field: &str, scoring: F)
where
    F: Fn(&CrewRecord) -> Option<f64>,
{
    let mut scored: Vec<(usize, Option<f64>)> = roster
        .iter()
        .enumerate()
        .map(|(index, crew)| (index, scoring(crew)))
        .collect();

    scored.sort_by(|(_, left), (_, right)| sort_key(*right).total_cmp(&sort_key(*left)));

    for (position, (index, score)) in scored.into_iter().enumerate() {
        let ranks = &mut roster[index].ranks;
        if qualifies(score) {
            ranks.insert(field.to_string(), (position + 1) as u32);
        } else {
            ranks.remove(field);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(scores: &[Option<f64>]) -> (Vec<CrewRecord>, Vec<Option<f64>>) {
        let crew = scores
            .iter()
            .enumerate()
            .map(|(index, _)| {
                serde_json::from_value(serde_json::json!({
                    "symbol": format!("crew_{index}"),
                    "name": format!("Crew {index}"),
                    "max_rarity": 5,
                }))
                .unwrap()
            })
            .collect();
        (crew, scores.to_vec())
    }

    fn score_of(scores: &[Option<f64>]) -> impl Fn(&CrewRecord) -> Option<f64> + '_ {
        move |crew: &CrewRecord| {
            let index: usize = crew.symbol.trim_start_matches("crew_").parse().unwrap();
            scores[index]
        }
    }

    fn rank_of(crew: &CrewRecord) -> Option<u32> {
        crew.ranks.get("metric").copied()
    }

    #[test]
    fn distinct_positive_scores_rank_one_to_n() {
        let (mut crew, scores) = roster(&[Some(10.0), Some(30.0), Some(20.0), Some(5.0)]);
        rank_by(&mut crew, "metric", score_of(&scores));
        let ranks: Vec<_> = crew.iter().map(rank_of).collect();
        assert_eq!(ranks, [Some(3), Some(1), Some(2), Some(4)]);

        let mut assigned: Vec<u32> = ranks.iter().flatten().copied().collect();
        assigned.sort_unstable();
        assert_eq!(assigned, [1, 2, 3, 4]);

        let best = scores
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.unwrap().total_cmp(&b.unwrap()))
            .map(|(index, _)| index)
            .unwrap();
        assert_eq!(rank_of(&crew[best]), Some(1));
    }

    #[test]
    fn non_positive_and_missing_scores_get_no_field() {
        let (mut crew, scores) = roster(&[Some(0.0), Some(7.0), None, Some(-3.0), Some(f64::NAN), Some(2.0)]);
        rank_by(&mut crew, "metric", score_of(&scores));
        let ranks: Vec<_> = crew.iter().map(rank_of).collect();
        assert_eq!(ranks, [None, Some(1), None, None, None, Some(2)]);
    }

    #[test]
    fn ties_keep_roster_order() {
        let (mut crew, scores) = roster(&[Some(4.0), Some(9.0), Some(4.0), Some(4.0)]);
        rank_by(&mut crew, "metric", score_of(&scores));
        let ranks: Vec<_> = crew.iter().map(rank_of).collect();
        assert_eq!(ranks, [Some(2), Some(1), Some(3), Some(4)]);
    }

    #[test]
    fn stale_fields_are_cleared() {
        let (mut crew, _) = roster(&[Some(1.0), Some(1.0)]);
        crew[0].ranks.insert("metric".to_string(), 9);
        rank_by(&mut crew, "metric", |_| Some(0.0));
        assert!(crew.iter().all(|c| rank_of(c).is_none()));
    }
}
