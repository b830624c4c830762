use crate::{
    api::Employee,
    components::{cards::Card, empty_state::EmptyState},
};
use leptos::*;

fn employee_row(employee: Employee) -> impl IntoView {
    let name = employee.full_name();
    let email = employee.email().unwrap_or("-").to_string();
    let department = employee
        .department
        .clone()
        .filter(|d| !d.trim().is_empty())
        .map(|d| view! { <p class="text-sm text-gray-500">{format!("Department: {}", d)}</p> });
    let skills = format!("Skills: {}", employee.skill_count());

    view! {
        <div class="flex items-center justify-between p-4 border rounded-lg">
            <div>
                <h3 class="font-medium">{name}</h3>
                <p class="text-sm text-gray-600">{email}</p>
                {department}
            </div>
            <div class="text-right">
                <p class="text-sm text-gray-600">{skills}</p>
            </div>
        </div>
    }
}

#[component]
pub fn EmployeesSection(#[prop(into)] employees: Signal<Vec<Employee>>) -> impl IntoView {
    view! {
        <Card title="Employee Management">
            {move || {
                let list = employees.get();
                if list.is_empty() {
                    view! { <EmptyState title="No employees found" /> }.into_view()
                } else {
                    list.into_iter().map(employee_row).collect_view()
                }
            }}
        </Card>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::employee_json, ssr::render_to_string};
    use serde_json::json;

    #[test]
    fn empty_list_shows_placeholder() {
        let html = render_to_string(|| {
            view! { <EmployeesSection employees=Signal::derive(Vec::new) /> }
        });
        assert!(html.contains("Employee Management"));
        assert!(html.contains("No employees found"));
    }

    #[test]
    fn rows_show_name_email_department_and_skill_count() {
        let html = render_to_string(|| {
            let employees: Vec<Employee> = vec![
                serde_json::from_value(employee_json(1, "Jo")).unwrap(),
                serde_json::from_value(json!({
                    "id": 2,
                    "firstName": "Sam",
                    "user": { "email": "sam@x.com" }
                }))
                .unwrap(),
            ];
            view! { <EmployeesSection employees=Signal::derive(move || employees.clone()) /> }
        });
        assert!(html.contains("Jo Doe"));
        assert!(html.contains("jo@x.com"));
        assert!(html.contains("Department: Engineering"));
        assert!(html.contains("Skills: 1"));
        assert!(html.contains("Sam"));
        assert!(html.contains("Skills: 0"));
        assert_eq!(html.matches("Department:").count(), 1);
        assert!(!html.contains("No employees found"));
    }
}
