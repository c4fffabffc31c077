use crate::types::result::RankedResult;

pub fn to_markdown(results: &[RankedResult]) -> String {
    let mut output = String::new();
    output.push_str("# Device Ranking\n\n");
    if results.is_empty() {
        output.push_str("- no devices\n");
        return output;
    }

    output.push_str(
        "| Rank | Device | Total | Perf | Batt | Cam | Disp | Build | Price | Rev | New |\n",
    );
    output.push_str(
        "|-----:|--------|------:|-----:|-----:|----:|-----:|------:|------:|----:|----:|\n",
    );
    for result in results {
        let b = &result.breakdown;
        output.push_str(&format!(
            "| {} | {} | {:.2} | {:.0} | {:.0} | {:.0} | {:.0} | {:.0} | {:.0} | {:.0} | {:.0} |\n",
            result.rank,
            result.device_name,
            result.total_score,
            b.performance,
            b.battery,
            b.camera,
            b.display,
            b.build,
            b.price,
            b.reviews,
            b.recency,
        ));
    }
    output
}
