//! Label selection
//!
//! The largest circles get labels since small ones are unfair tap targets.
//! Labels are shuffled across the chosen circles so the sequence does not
//! follow circle size or creation order.

use rand::Rng;
use rand::seq::SliceRandom;

use super::packer::Packing;

/// Label the `count` largest circles with a shuffled `1..=k`.
///
/// Returns `k = min(count, packing.len())`, the highest label on the board.
/// Equal radii keep creation order when choosing which circles qualify.
pub fn number_circles<R>(packing: &mut Packing, count: u32, rng: &mut R) -> u32
where
    R: Rng + ?Sized,
{
    let circles = packing.circles_mut();

    let mut by_size: Vec<usize> = (0..circles.len()).collect();
    by_size.sort_by(|&a, &b| circles[b].radius.total_cmp(&circles[a].radius));
    by_size.truncate(count as usize);
    by_size.shuffle(rng);

    for (label, &idx) in (1u32..).zip(by_size.iter()) {
        circles[idx].assign_label(label);
    }

    by_size.len() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::geometry::Circle;
    use crate::sim::packer::pack;
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn sized(radii: &[f32]) -> Packing {
        let circles = radii
            .iter()
            .enumerate()
            .map(|(i, &r)| Circle::new(Vec2::new(i as f32 * 100.0 + 50.0, 50.0), r))
            .collect();
        Packing::from_circles(radii.len() as f32 * 100.0, 100.0, circles)
    }

    fn sorted_labels(packing: &Packing) -> Vec<u32> {
        let mut labels: Vec<u32> = packing.numbered().filter_map(|c| c.label()).collect();
        labels.sort_unstable();
        labels
    }

    #[test]
    fn test_largest_circles_are_labeled() {
        let mut packing = sized(&[5.0, 40.0, 10.0, 30.0, 20.0]);
        let mut rng = Pcg32::seed_from_u64(11);
        let last = number_circles(&mut packing, 3, &mut rng);

        assert_eq!(last, 3);
        let labeled: Vec<f32> = packing.numbered().map(|c| c.radius).collect();
        // Creation order is untouched, only the three largest carry labels
        assert_eq!(labeled, vec![40.0, 30.0, 20.0]);
        assert_eq!(sorted_labels(&packing), vec![1, 2, 3]);
        assert!(packing.circles()[0].label().is_none());
        assert!(packing.circles()[2].label().is_none());
    }

    #[test]
    fn test_fewer_circles_than_count() {
        let mut packing = sized(&[8.0, 9.0]);
        let last = number_circles(&mut packing, 25, &mut Pcg32::seed_from_u64(0));
        assert_eq!(last, 2);
        assert_eq!(sorted_labels(&packing), vec![1, 2]);
    }

    #[test]
    fn test_empty_packing() {
        let mut packing = sized(&[]);
        assert_eq!(number_circles(&mut packing, 25, &mut Pcg32::seed_from_u64(0)), 0);
        assert_eq!(packing.numbered().count(), 0);
    }

    #[test]
    fn test_labels_do_not_follow_size() {
        // Across seeds, label 1 should not always land on the largest circle
        let radii: Vec<f32> = (1..=10).map(|r| r as f32 * 4.0).collect();
        let mut label_one_on_largest = 0;
        for seed in 0..20 {
            let mut packing = sized(&radii);
            number_circles(&mut packing, 10, &mut Pcg32::seed_from_u64(seed));
            if packing.circles()[9].label() == Some(1) {
                label_one_on_largest += 1;
            }
        }
        assert!(label_one_on_largest < 20);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_labels_are_contiguous(seed in any::<u64>(), count in 1u32..40) {
            let settings = Settings { max_attempts: 300, ..Default::default() };
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut packing = pack(400.0, 400.0, &settings, &mut rng).unwrap();
            let last = number_circles(&mut packing, count, &mut rng);

            let expected_len = (count as usize).min(packing.len());
            prop_assert_eq!(last as usize, expected_len);
            prop_assert_eq!(sorted_labels(&packing), (1..=last).collect::<Vec<_>>());
        }
    }
}
