use crate::models::{Dataset, MetricRecord};
use crate::ui::{StatSlot, StatSlots};

fn overview_slot(metric: &str) -> Option<StatSlot> {
    match metric {
        "Country" => Some(StatSlot::Country),
        "Category" => Some(StatSlot::Category),
        _ => None,
    }
}

fn credits_slot(metric: &str) -> Option<StatSlot> {
    match metric {
        "Credits Issued" => Some(StatSlot::CreditsIssued),
        "Credits Retired" => Some(StatSlot::CreditsRetired),
        _ => None,
    }
}

fn bind(stats: &mut StatSlots, records: &[MetricRecord], slot_for: fn(&str) -> Option<StatSlot>) {
    for record in records {
        if let Some(slot) = record.metric_name().and_then(slot_for) {
            stats.set(slot, record.value_text());
        }
    }
}

/// Write the recognized `Overview` and `Credits Summary` metrics into the
/// summary cards. Unmatched slots keep whatever they showed before; when a
/// metric repeats, the last record wins.
pub fn update_stats(stats: &mut StatSlots, dataset: &Dataset) {
    bind(stats, &dataset.overview, overview_slot);
    bind(stats, &dataset.credits_summary, credits_slot);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldValue;

    fn metric(name: &str, value: impl Into<FieldValue>) -> MetricRecord {
        MetricRecord {
            metric: Some(FieldValue::from(name)),
            value: Some(value.into()),
        }
    }

    #[test]
    fn binds_country_and_leaves_missing_credits_untouched() {
        let dataset = Dataset {
            overview: vec![metric("Country", "Kenya")],
            ..Dataset::default()
        };
        let mut stats = StatSlots::default();
        stats.set(StatSlot::CreditsIssued, "previous".to_string());

        update_stats(&mut stats, &dataset);

        assert_eq!(stats.get(StatSlot::Country), Some("Kenya"));
        assert_eq!(stats.get(StatSlot::Category), None);
        assert_eq!(stats.get(StatSlot::CreditsIssued), Some("previous"));
    }

    #[test]
    fn last_duplicate_metric_wins() {
        let dataset = Dataset {
            credits_summary: vec![
                metric("Credits Issued", 100),
                metric("Credits Issued", 250),
                metric("Credits Retired", "1,200"),
            ],
            ..Dataset::default()
        };
        let mut stats = StatSlots::default();

        update_stats(&mut stats, &dataset);

        assert_eq!(stats.get(StatSlot::CreditsIssued), Some("250"));
        assert_eq!(stats.get(StatSlot::CreditsRetired), Some("1,200"));
    }

    #[test]
    fn metrics_only_bind_from_their_own_section() {
        let dataset = Dataset {
            overview: vec![metric("Credits Issued", 5)],
            credits_summary: vec![metric("Country", "Peru")],
            ..Dataset::default()
        };
        let mut stats = StatSlots::default();

        update_stats(&mut stats, &dataset);

        assert_eq!(stats, StatSlots::default());
    }
}
