//! Canned API responses shared by the unit tests.

pub(crate) const METRICS_BODY: &str = r#"[
  {
    "id": "ckw8m2h6y3421a8b9n0x4q7rl",
    "name": "Inclusion time",
    "suffix": "ms",
    "active": true,
    "order": 0
  },
  {
    "id": "ckw8m2i1d3519a8b9dq2vh5em",
    "name": "Finalization time",
    "suffix": "ms",
    "active": true,
    "order": 1
  }
]"#;
