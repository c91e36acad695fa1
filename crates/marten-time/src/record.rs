//! Record extraction from host property bags.

use tracing::debug;

use crate::error::{TimeError, TimeResult};
use crate::fields::{TimeField, TimeFields};

/// Host-side view of a keyed property bag holding time fields.
///
/// The kernel drives lookups and coercions through this trait and never
/// inspects the host's value representation; `Raw` stays opaque between the
/// two calls. Either call may fail with a host error, which the kernel
/// propagates unchanged.
pub trait TimeLike {
    /// Looked-up property value, before numeric coercion.
    type Raw;

    /// Look up a property by name.
    ///
    /// `Ok(None)` means the property is absent or explicitly undefined; the
    /// two are indistinguishable to the kernel.
    fn get(&mut self, name: &'static str) -> TimeResult<Option<Self::Raw>>;

    /// Coerce a looked-up value to an integer or an infinity.
    ///
    /// The contract is the host number model's integer coercion: not-a-number
    /// becomes zero, infinities keep their sign, finite values truncate
    /// toward zero.
    fn to_integer_or_infinity(&mut self, raw: Self::Raw) -> TimeResult<f64>;
}

/// Extract a draft record from a host value.
///
/// Walks the six fields in canonical order and fails at the first property
/// that is absent, naming it in the error. Later fields are not looked up
/// after a failure. No range validation happens here; the draft goes to
/// regulation next.
pub fn to_time_record<S: TimeLike>(source: &mut S) -> TimeResult<TimeFields> {
    let mut record = TimeFields::default();
    for field in TimeField::ALL {
        let value = match source.get(field.name())? {
            Some(raw) => source.to_integer_or_infinity(raw)?,
            None => {
                debug!("time record extraction stopped: `{}` is missing", field);
                return Err(TimeError::MissingField(field.name()));
            }
        };
        record.set(field, value);
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Property bag backed by a list of `(name, value)` pairs, recording the
    /// order of lookups it serves.
    struct BagSource {
        entries: Vec<(&'static str, f64)>,
        lookups: Vec<&'static str>,
    }

    impl BagSource {
        fn new(entries: &[(&'static str, f64)]) -> Self {
            Self {
                entries: entries.to_vec(),
                lookups: Vec::new(),
            }
        }

        fn full() -> Self {
            Self::new(&[
                ("hour", 6.0),
                ("minute", 30.0),
                ("second", 15.0),
                ("millisecond", 100.0),
                ("microsecond", 200.0),
                ("nanosecond", 300.0),
            ])
        }
    }

    impl TimeLike for BagSource {
        type Raw = f64;

        fn get(&mut self, name: &'static str) -> TimeResult<Option<f64>> {
            self.lookups.push(name);
            Ok(self
                .entries
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value))
        }

        fn to_integer_or_infinity(&mut self, raw: f64) -> TimeResult<f64> {
            Ok(if raw.is_nan() {
                0.0
            } else if raw.is_infinite() {
                raw
            } else {
                raw.trunc()
            })
        }
    }

    /// Source whose collaborator calls fail on one chosen property.
    struct FailingSource {
        fail_on: &'static str,
        fail_in_coercion: bool,
    }

    impl TimeLike for FailingSource {
        type Raw = &'static str;

        fn get(&mut self, name: &'static str) -> TimeResult<Option<&'static str>> {
            if name == self.fail_on && !self.fail_in_coercion {
                return Err(TimeError::host(format!("getter for `{name}` threw")));
            }
            Ok(Some(name))
        }

        fn to_integer_or_infinity(&mut self, raw: &'static str) -> TimeResult<f64> {
            if raw == self.fail_on && self.fail_in_coercion {
                return Err(TimeError::host(format!("coercion of `{raw}` threw")));
            }
            Ok(0.0)
        }
    }

    #[test]
    fn test_extracts_all_six_fields() {
        let mut source = BagSource::full();
        let record = to_time_record(&mut source).unwrap();
        assert_eq!(record.hour, 6.0);
        assert_eq!(record.minute, 30.0);
        assert_eq!(record.second, 15.0);
        assert_eq!(record.millisecond, 100.0);
        assert_eq!(record.microsecond, 200.0);
        assert_eq!(record.nanosecond, 300.0);
    }

    #[test]
    fn test_lookup_order_is_canonical() {
        let mut source = BagSource::full();
        to_time_record(&mut source).unwrap();
        assert_eq!(
            source.lookups,
            [
                "hour",
                "minute",
                "second",
                "millisecond",
                "microsecond",
                "nanosecond"
            ]
        );
    }

    #[test]
    fn test_missing_second_is_reported_by_name() {
        let mut source = BagSource::new(&[
            ("hour", 1.0),
            ("minute", 2.0),
            ("millisecond", 4.0),
            ("microsecond", 5.0),
            ("nanosecond", 6.0),
        ]);
        assert_eq!(
            to_time_record(&mut source),
            Err(TimeError::MissingField("second"))
        );
    }

    #[test]
    fn test_stops_at_first_missing_field() {
        let mut source = BagSource::new(&[("hour", 1.0), ("nanosecond", 6.0)]);
        assert_eq!(
            to_time_record(&mut source),
            Err(TimeError::MissingField("minute"))
        );
        // Nothing after the failing field was looked up.
        assert_eq!(source.lookups, ["hour", "minute"]);
    }

    #[test]
    fn test_empty_bag_reports_hour_first() {
        let mut source = BagSource::new(&[]);
        assert_eq!(
            to_time_record(&mut source),
            Err(TimeError::MissingField("hour"))
        );
        assert_eq!(source.lookups, ["hour"]);
    }

    #[test]
    fn test_coercion_is_applied_per_field() {
        let mut source = BagSource::new(&[
            ("hour", 12.9),
            ("minute", -2.5),
            ("second", f64::NAN),
            ("millisecond", f64::INFINITY),
            ("microsecond", f64::NEG_INFINITY),
            ("nanosecond", 7.0),
        ]);
        let record = to_time_record(&mut source).unwrap();
        assert_eq!(record.hour, 12.0);
        assert_eq!(record.minute, -2.0);
        assert_eq!(record.second, 0.0);
        assert_eq!(record.millisecond, f64::INFINITY);
        assert_eq!(record.microsecond, f64::NEG_INFINITY);
        assert_eq!(record.nanosecond, 7.0);
    }

    #[test]
    fn test_no_range_validation_during_extraction() {
        let mut source = BagSource::new(&[
            ("hour", 99.0),
            ("minute", -30.0),
            ("second", 0.0),
            ("millisecond", 0.0),
            ("microsecond", 0.0),
            ("nanosecond", 1_000_000.0),
        ]);
        let record = to_time_record(&mut source).unwrap();
        assert_eq!(record.hour, 99.0);
        assert_eq!(record.minute, -30.0);
        assert_eq!(record.nanosecond, 1_000_000.0);
    }

    #[test]
    fn test_lookup_error_propagates_unchanged() {
        let mut source = FailingSource {
            fail_on: "minute",
            fail_in_coercion: false,
        };
        assert_eq!(
            to_time_record(&mut source),
            Err(TimeError::host("getter for `minute` threw"))
        );
    }

    #[test]
    fn test_coercion_error_propagates_unchanged() {
        let mut source = FailingSource {
            fail_on: "millisecond",
            fail_in_coercion: true,
        };
        assert_eq!(
            to_time_record(&mut source),
            Err(TimeError::host("coercion of `millisecond` threw"))
        );
    }

    #[test]
    fn test_missing_field_error_message() {
        let error = TimeError::MissingField("second");
        assert_eq!(
            error.to_string(),
            "required time property `second` is missing"
        );
    }
}
