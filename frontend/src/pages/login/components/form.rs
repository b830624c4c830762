use crate::{
    components::error::InlineErrorMessage,
    pages::login::{utils::password_input_type, view_model::LoginViewModel},
};
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

#[component]
pub fn LoginForm(vm: LoginViewModel) -> impl IntoView {
    let pending = vm.login_action.pending();
    let error = vm.error;

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                        "Sign in to SkillForge"
                    </h2>
                    <p class="mt-2 text-center text-sm text-gray-600">
                        "Employee skill management"
                    </p>
                </div>
                <form class="mt-8 space-y-6" on:submit=handle_submit>
                    <div class="space-y-4">
                        <div>
                            <label for="email" class="block text-sm font-medium text-gray-700">"Email"</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                autocomplete="email"
                                required
                                class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md placeholder-gray-500 text-gray-900 focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm"
                                placeholder="you@company.com"
                                prop:value=vm.email
                                on:input=move |ev| {
                                    let target = event_target::<HtmlInputElement>(&ev);
                                    vm.email.set(target.value());
                                }
                            />
                        </div>
                        <div>
                            <label for="password" class="block text-sm font-medium text-gray-700">"Password"</label>
                            <div class="relative mt-1">
                                <input
                                    id="password"
                                    name="password"
                                    type=move || password_input_type(vm.show_password.get())
                                    autocomplete="current-password"
                                    required
                                    class="block w-full px-3 py-2 pr-16 border border-gray-300 rounded-md placeholder-gray-500 text-gray-900 focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm"
                                    placeholder="Password"
                                    prop:value=vm.password
                                    on:input=move |ev| {
                                        let target = event_target::<HtmlInputElement>(&ev);
                                        vm.password.set(target.value());
                                    }
                                />
                                <button
                                    type="button"
                                    class="absolute inset-y-0 right-0 px-3 text-sm text-gray-500 hover:text-gray-700"
                                    on:click=move |_| vm.show_password.update(|shown| *shown = !*shown)
                                >
                                    {move || if vm.show_password.get() { "Hide" } else { "Show" }}
                                </button>
                            </div>
                        </div>
                    </div>

                    <InlineErrorMessage error=error />

                    <div>
                        <button
                            type="submit"
                            disabled=pending
                            class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 disabled:opacity-50"
                        >
                            {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
