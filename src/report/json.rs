use crate::types::result::RankedResult;

pub fn to_json(results: &[RankedResult]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::result::ScoreBreakdown;

    #[test]
    fn json_report_contains_ranks_and_scores() {
        let results = vec![RankedResult {
            device_id: "d1".to_string(),
            device_name: "Acme One".to_string(),
            total_score: 61.25,
            breakdown: ScoreBreakdown {
                performance: 50.0,
                battery: 100.0,
                camera: 0.0,
                display: 50.0,
                build: 50.0,
                price: 85.0,
                reviews: 50.0,
                recency: 25.0,
            },
            rank: 1,
        }];

        let rendered = to_json(&results).expect("json should serialize");
        assert!(rendered.contains("\"device_id\": \"d1\""));
        assert!(rendered.contains("\"total_score\": 61.25"));
        assert!(rendered.contains("\"rank\": 1"));
    }
}
