use crate::aggregate::aggregate;
use crate::score::ScoringEngine;
use crate::types::device::DeviceRecord;
use crate::types::result::RankedResult;
use crate::types::weights::WeightVector;

/// Score every device, sort by total descending and assign dense 1-based
/// ranks. Ties keep their relative input order: the input position is
/// captured before scoring and used as the secondary sort key, so the
/// result does not depend on evaluation order.
pub fn rank(
    engine: &ScoringEngine,
    devices: &[DeviceRecord],
    weights: &WeightVector,
) -> Vec<RankedResult> {
    let mut scored: Vec<(usize, RankedResult)> = devices
        .iter()
        .enumerate()
        .map(|(position, device)| {
            let breakdown = engine.breakdown(device);
            let total_score = aggregate(&breakdown, weights);
            (
                position,
                RankedResult {
                    device_id: device.id.clone(),
                    device_name: device.name.clone(),
                    total_score,
                    breakdown,
                    rank: 0,
                },
            )
        })
        .collect();

    scored.sort_by(|(pos_a, a), (pos_b, b)| {
        b.total_score
            .total_cmp(&a.total_score)
            .then(pos_a.cmp(pos_b))
    });

    tracing::debug!(devices = scored.len(), "ranked catalog");

    scored
        .into_iter()
        .enumerate()
        .map(|(index, (_, mut result))| {
            result.rank = index as u32 + 1;
            result
        })
        .collect()
}
