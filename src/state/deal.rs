//! Deal records and the field-level edit operations the table applies to them.

/// Pipeline stage of a deal. Rendered as a colored pill and edited
/// through an enumerated dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    New,
    Qualified,
    Won,
    Lost,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::New, Stage::Qualified, Stage::Won, Stage::Lost];

    pub fn label(self) -> &'static str {
        match self {
            Stage::New => "New",
            Stage::Qualified => "Qualified",
            Stage::Won => "Won",
            Stage::Lost => "Lost",
        }
    }

    pub fn from_label(label: &str) -> Option<Stage> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.label().eq_ignore_ascii_case(label.trim()))
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Stage::New => "status-new",
            Stage::Qualified => "status-qualified",
            Stage::Won => "status-won",
            Stage::Lost => "status-lost",
        }
    }
}

/// Commercial status of a deal, orthogonal to the pipeline stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Open,
    OnHold,
    Won,
    Lost,
}

impl Status {
    pub const ALL: [Status; 4] = [Status::Open, Status::OnHold, Status::Won, Status::Lost];

    pub fn label(self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::OnHold => "On Hold",
            Status::Won => "Won",
            Status::Lost => "Lost",
        }
    }

    pub fn from_label(label: &str) -> Option<Status> {
        Status::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// One row of the table. `id` is unique for the lifetime of the session.
#[derive(Clone, Debug, PartialEq)]
pub struct Deal {
    pub id: String,
    pub company: String,
    pub owner: String,
    pub stage: Stage,
    pub amount: f64,
    pub status: Status,
    pub created: String,
    pub close_date: Option<String>,
    pub notes: Option<String>,
}

/// A single-field mutation, tagged by the field it targets. All cell
/// editors funnel their commits through this type.
#[derive(Clone, Debug, PartialEq)]
pub enum DealEdit {
    Company(String),
    Owner(String),
    Stage(Stage),
    Amount(f64),
    Status(Status),
    Created(String),
    CloseDate(Option<String>),
    Notes(Option<String>),
}

/// Apply an edit to the record with the given id. Returns true when a
/// field actually changed; unknown ids and equal values are no-ops.
pub fn apply_edit(deals: &mut [Deal], id: &str, edit: DealEdit) -> bool {
    let Some(deal) = deals.iter_mut().find(|deal| deal.id == id) else {
        return false;
    };
    match edit {
        DealEdit::Company(value) => replace(&mut deal.company, value),
        DealEdit::Owner(value) => replace(&mut deal.owner, value),
        DealEdit::Stage(value) => replace(&mut deal.stage, value),
        DealEdit::Amount(value) => replace(&mut deal.amount, value),
        DealEdit::Status(value) => replace(&mut deal.status, value),
        DealEdit::Created(value) => replace(&mut deal.created, value),
        DealEdit::CloseDate(value) => replace(&mut deal.close_date, value),
        DealEdit::Notes(value) => replace(&mut deal.notes, value),
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Clone the record with the given id and append the copy at the end.
/// The copy gets a `-copy` suffixed id, uniquified if already taken.
/// Returns the new id.
pub fn duplicate_deal(deals: &mut Vec<Deal>, id: &str) -> Option<String> {
    let source = deals.iter().find(|deal| deal.id == id)?.clone();
    let mut copy_id = format!("{id}-copy");
    let mut attempt = 2;
    while deals.iter().any(|deal| deal.id == copy_id) {
        copy_id = format!("{id}-copy{attempt}");
        attempt += 1;
    }
    let mut copy = source;
    copy.id = copy_id.clone();
    deals.push(copy);
    Some(copy_id)
}

/// Remove the record with the given id. Returns true when found.
pub fn delete_deal(deals: &mut Vec<Deal>, id: &str) -> bool {
    let before = deals.len();
    deals.retain(|deal| deal.id != id);
    deals.len() != before
}

/// Append a blank record with a fresh `D-<n>` id, one past the highest
/// numeric id currently in the store. Returns the new id.
pub fn new_deal(deals: &mut Vec<Deal>) -> String {
    let next = deals
        .iter()
        .filter_map(|deal| deal.id.strip_prefix("D-"))
        .filter_map(|suffix| suffix.parse::<u32>().ok())
        .max()
        .map(|highest| highest + 1)
        .unwrap_or(1001);
    let id = format!("D-{next}");
    deals.push(Deal {
        id: id.clone(),
        company: String::new(),
        owner: String::new(),
        stage: Stage::New,
        amount: 0.0,
        status: Status::Open,
        created: chrono::Local::now().format("%Y-%m-%d").to_string(),
        close_date: None,
        notes: None,
    });
    id
}

/// Parse user input into an amount. Commas and spaces are stripped
/// before parsing; anything that is not a finite non-negative number
/// is rejected.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != ' ').collect();
    if cleaned.is_empty() {
        return None;
    }
    let value = cleaned.parse::<f64>().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Render an amount with thousands separators, trimming trailing
/// fraction zeros. `12000.0` becomes `12,000`, `1000.5` becomes `1,000.5`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let text = if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let mut text = format!("{value:.2}");
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
        text
    };
    match text.split_once('.') {
        Some((whole, frac)) => format!("{}.{frac}", group_thousands(whole)),
        None => group_thousands(&text),
    }
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(bytes.len() + bytes.len() / 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*byte as char);
    }
    out
}

/// The dataset the app opens with and the target of a full reset.
pub fn seed_deals() -> Vec<Deal> {
    vec![
        Deal {
            id: "D-1001".into(),
            company: "Acme Corp".into(),
            owner: "Alice".into(),
            stage: Stage::New,
            amount: 12000.0,
            status: Status::Open,
            created: "2025-05-01".into(),
            close_date: None,
            notes: Some("Lead from webinar".into()),
        },
        Deal {
            id: "D-1002".into(),
            company: "Globex Inc".into(),
            owner: "Bob".into(),
            stage: Stage::Qualified,
            amount: 30000.0,
            status: Status::Open,
            created: "2025-06-15".into(),
            close_date: None,
            notes: Some("Budget approved".into()),
        },
        Deal {
            id: "D-1003".into(),
            company: "Initech".into(),
            owner: "Carol".into(),
            stage: Stage::Won,
            amount: 55000.0,
            status: Status::Won,
            created: "2025-02-10".into(),
            close_date: Some("2025-03-05".into()),
            notes: Some("Annual contract".into()),
        },
        Deal {
            id: "D-1004".into(),
            company: "Umbrella Co.".into(),
            owner: "David".into(),
            stage: Stage::Lost,
            amount: 18000.0,
            status: Status::Lost,
            created: "2025-01-22".into(),
            close_date: None,
            notes: Some("Chose competitor".into()),
        },
        Deal {
            id: "D-1005".into(),
            company: "Soylent".into(),
            owner: "Eve".into(),
            stage: Stage::Qualified,
            amount: 25000.0,
            status: Status::Open,
            created: "2025-05-21".into(),
            close_date: None,
            notes: None,
        },
        Deal {
            id: "D-1006".into(),
            company: "Stark Industries".into(),
            owner: "Frank".into(),
            stage: Stage::New,
            amount: 42000.0,
            status: Status::OnHold,
            created: "2025-07-12".into(),
            close_date: None,
            notes: Some("Needs legal review".into()),
        },
        Deal {
            id: "D-1007".into(),
            company: "Wayne Enterprises".into(),
            owner: "Alice".into(),
            stage: Stage::New,
            amount: 8000.0,
            status: Status::Open,
            created: "2025-06-03".into(),
            close_date: None,
            notes: None,
        },
        Deal {
            id: "D-1008".into(),
            company: "Wonka Factory".into(),
            owner: "Bob".into(),
            stage: Stage::Won,
            amount: 76000.0,
            status: Status::Won,
            created: "2025-03-18".into(),
            close_date: Some("2025-04-10".into()),
            notes: None,
        },
        Deal {
            id: "D-1009".into(),
            company: "Tyrell Corp".into(),
            owner: "Carol".into(),
            stage: Stage::Qualified,
            amount: 19500.0,
            status: Status::Open,
            created: "2025-05-29".into(),
            close_date: None,
            notes: None,
        },
        Deal {
            id: "D-1010".into(),
            company: "Hooli".into(),
            owner: "Eve".into(),
            stage: Stage::New,
            amount: 15000.0,
            status: Status::Open,
            created: "2025-07-01".into(),
            close_date: None,
            notes: None,
        },
    ]
}
