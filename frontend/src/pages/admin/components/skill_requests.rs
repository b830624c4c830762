use crate::{
    api::{SkillDecision, SkillRequest},
    components::{
        cards::Card,
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
    },
    pages::admin::utils::{
        filter_button_class, filter_button_label, filter_requests, level_class,
        status_badge_class, StatusFilter,
    },
};
use leptos::*;

fn request_row(
    request: SkillRequest,
    on_decide: Callback<(i64, SkillDecision)>,
    deciding: Signal<bool>,
) -> impl IntoView {
    let id = request.id;
    let badge = format!(
        "px-2 py-1 text-xs font-medium rounded-full {}",
        status_badge_class(request.status)
    );
    let actions = request.is_pending().then(|| {
        view! {
            <div class="flex space-x-2">
                <Button
                    variant=ButtonVariant::Approve
                    disabled=deciding
                    on:click=move |_| on_decide.call((id, SkillDecision::Approved))
                >
                    "Approve"
                </Button>
                <Button
                    variant=ButtonVariant::Reject
                    disabled=deciding
                    on:click=move |_| on_decide.call((id, SkillDecision::Rejected))
                >
                    "Reject"
                </Button>
            </div>
        }
    });

    view! {
        <div class="p-4 border rounded-lg">
            <div class="flex items-start justify-between">
                <div class="flex-1">
                    <div class="flex items-center space-x-2 mb-2">
                        <h3 class="font-medium">{request.employee_name()}</h3>
                        <span class=badge>{request.status.as_str()}</span>
                    </div>
                    <p class="text-sm text-gray-600">
                        {request.employee_email().unwrap_or("-").to_string()}
                    </p>
                    <p class="text-sm text-gray-600">
                        {format!("Skill: {} ", request.skill.name)}
                        <span class=level_class(&request.level)>
                            {format!("(Level: {})", request.level)}
                        </span>
                    </p>
                </div>
                {actions}
            </div>
        </div>
    }
}

#[component]
fn StatusFilterBar(
    filter: RwSignal<StatusFilter>,
    requests: Signal<Vec<SkillRequest>>,
) -> impl IntoView {
    view! {
        <div class="flex space-x-2">
            {StatusFilter::ALL
                .into_iter()
                .map(|option| {
                    view! {
                        <button
                            class=move || filter_button_class(filter.get() == option)
                            on:click=move |_| filter.set(option)
                        >
                            {move || requests.with(|list| filter_button_label(option, list))}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn SkillRequestsSection(
    #[prop(into)] requests: Signal<Vec<SkillRequest>>,
    filter: RwSignal<StatusFilter>,
    on_decide: Callback<(i64, SkillDecision)>,
    #[prop(optional, into)] deciding: MaybeSignal<bool>,
) -> impl IntoView {
    let deciding = Signal::derive(move || deciding.get());
    view! {
        <Card title="Skill Requests Management">
            <StatusFilterBar filter=filter requests=requests />
            {move || {
                let current = filter.get();
                let list = requests.with(|all| filter_requests(all, current));
                if list.is_empty() {
                    view! {
                        <EmptyState
                            title=current.empty_title()
                            description=current.empty_description()
                        />
                    }
                    .into_view()
                } else {
                    list.into_iter()
                        .map(|request| request_row(request, on_decide, deciding))
                        .collect_view()
                }
            }}
        </Card>
    }
}
