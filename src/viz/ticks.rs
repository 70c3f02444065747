use gridplot::Tick;

/// Index spacing from the 1-2-5 sequence that keeps at most ~10 labeled
/// ticks on an axis.
pub(crate) fn tick_spacing(count: usize) -> usize {
    const MAX_TICKS: usize = 10;
    let mut scale = 1;
    loop {
        for mult in [1, 2, 5] {
            let candidate = mult * scale;
            if count <= candidate * MAX_TICKS {
                return candidate;
            }
        }
        scale *= 10;
    }
}

/// Ticks for an axis indexed by position labels. `to_frac` maps a 0-based
/// slot to its fraction along the axis.
pub(crate) fn index_ticks(labels: &[i64], to_frac: impl Fn(usize) -> f64) -> Vec<Tick> {
    let spacing = tick_spacing(labels.len());
    (0..labels.len())
        .step_by(spacing)
        .map(|slot| Tick {
            frac: to_frac(slot),
            label: Some(labels[slot].to_string()),
        })
        .collect()
}

/// Evenly spaced value ticks from 0 to `max`.
pub(crate) fn value_ticks(max: f64) -> Vec<Tick> {
    const COUNT: usize = 5;
    (0..COUNT)
        .map(|step| {
            let frac = step as f64 / (COUNT - 1) as f64;
            Tick {
                frac,
                label: Some(format!("{:.2}", max * frac)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_the_1_2_5_sequence() {
        assert_eq!(tick_spacing(8), 1);
        assert_eq!(tick_spacing(10), 1);
        assert_eq!(tick_spacing(11), 2);
        assert_eq!(tick_spacing(20), 2);
        assert_eq!(tick_spacing(45), 5);
        assert_eq!(tick_spacing(100), 10);
        assert_eq!(tick_spacing(1500), 200);
    }

    #[test]
    fn short_axes_label_every_position() {
        let labels: Vec<i64> = (1..=5).collect();
        let ticks = index_ticks(&labels, |slot| slot as f64);
        let rendered: Vec<_> = ticks.iter().filter_map(|t| t.label.clone()).collect();
        assert_eq!(rendered, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn value_ticks_span_zero_to_max() {
        let ticks = value_ticks(2.0);
        assert_eq!(ticks.first().unwrap().label.as_deref(), Some("0.00"));
        assert_eq!(ticks.last().unwrap().label.as_deref(), Some("2.00"));
        assert_eq!(ticks.last().unwrap().frac, 1.0);
    }
}
