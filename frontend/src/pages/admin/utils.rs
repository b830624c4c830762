use crate::api::{Employee, SkillRequest, SkillRequestStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Employees,
    Skills,
}

impl AdminTab {
    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Employees => "Employees",
            AdminTab::Skills => "Skill Requests",
        }
    }
}

/// Display-only filter over the skill request list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Approved,
    Rejected,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Pending,
        StatusFilter::Approved,
        StatusFilter::Rejected,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::Approved => "Approved",
            StatusFilter::Rejected => "Rejected",
        }
    }

    pub fn status(&self) -> Option<SkillRequestStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Pending => Some(SkillRequestStatus::Pending),
            StatusFilter::Approved => Some(SkillRequestStatus::Approved),
            StatusFilter::Rejected => Some(SkillRequestStatus::Rejected),
        }
    }

    pub fn matches(&self, request: &SkillRequest) -> bool {
        self.status().map_or(true, |status| request.status == status)
    }

    pub fn empty_title(&self) -> String {
        match self.status() {
            None => "No skill requests found".to_string(),
            Some(status) => format!("No {} requests", status.as_str().to_lowercase()),
        }
    }

    pub fn empty_description(&self) -> String {
        match self.status() {
            None => "Skill requests will appear here when employees submit them.".to_string(),
            Some(status) => format!(
                "No requests with {} status.",
                status.as_str().to_lowercase()
            ),
        }
    }
}

pub fn filter_requests(requests: &[SkillRequest], filter: StatusFilter) -> Vec<SkillRequest> {
    requests
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect()
}

pub fn status_count(requests: &[SkillRequest], status: SkillRequestStatus) -> usize {
    requests.iter().filter(|r| r.status == status).count()
}

pub fn filter_button_label(filter: StatusFilter, requests: &[SkillRequest]) -> String {
    match filter.status() {
        None => filter.label().to_string(),
        Some(status) => format!("{} ({})", filter.label(), status_count(requests, status)),
    }
}

pub fn filter_button_class(active: bool) -> &'static str {
    if active {
        "px-3 py-1 text-sm rounded-md bg-blue-600 text-white"
    } else {
        "px-3 py-1 text-sm rounded-md border border-gray-300 text-gray-700 hover:bg-gray-50"
    }
}

pub fn level_class(level: &str) -> &'static str {
    match level {
        "Intermediate" => "text-green-500",
        "Advanced" => "text-blue-500",
        "Expert" => "text-purple-500",
        _ => "text-gray-500",
    }
}

pub fn employee_count(employees: &[Employee]) -> usize {
    employees.len()
}

pub fn pending_count(requests: &[SkillRequest]) -> usize {
    status_count(requests, SkillRequestStatus::Pending)
}

pub fn tab_label(tab: AdminTab, count: usize) -> String {
    format!("{} ({})", tab.label(), count)
}

pub fn tab_button_class(active: bool) -> &'static str {
    if active {
        "flex items-center space-x-2 px-4 py-2 rounded-lg transition-colors bg-blue-600 text-white"
    } else {
        "flex items-center space-x-2 px-4 py-2 rounded-lg transition-colors bg-white text-gray-700 hover:bg-gray-50"
    }
}

pub fn status_badge_class(status: SkillRequestStatus) -> &'static str {
    match status {
        SkillRequestStatus::Approved => "bg-green-100 text-green-800",
        SkillRequestStatus::Rejected => "bg-red-100 text-red-800",
        SkillRequestStatus::Pending => "bg-yellow-100 text-yellow-800",
    }
}
