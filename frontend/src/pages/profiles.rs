use leptos::*;
use leptos_router::use_params_map;

use crate::{
    api::{ApiClient, ApiError, EmployeeBasicResponse, EmployeeRequest},
    components::{
        common::{Button, ErrorMessage, LoadingSpinner, SuccessMessage},
        layout::Layout,
    },
    utils::time::today_in_app_tz,
};

#[component]
fn EmployeeForm(on_created: Callback<()>) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();

    let name = create_rw_signal(String::new());
    let lastname = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let pesel = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let date_of_birth = create_rw_signal(String::new());
    let sex = create_rw_signal("K".to_string());
    let role = create_rw_signal("USER".to_string());
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let hired_on = create_rw_signal(today_in_app_tz().format("%Y-%m-%d").to_string());
    let hourly_rate = create_rw_signal(String::new());
    let work_time = create_rw_signal("PEŁNY_ETAT".to_string());
    let settlement_kind = create_rw_signal("GODZINOWY".to_string());

    let error = create_rw_signal(None::<ApiError>);
    let success = create_rw_signal(None::<String>);

    let submit_action = create_action(move |request: &EmployeeRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { api.create_employee(&request).await }
    });
    let pending = submit_action.pending();

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(employee) => {
                    success.set(Some(format!("Dodano pracownika: {}", employee.full_name())));
                    on_created.call(());
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        error.set(None);
        success.set(None);
        let rate = match hourly_rate.get_untracked().parse::<f64>() {
            Ok(rate) if rate >= 0.0 => rate,
            _ => {
                error.set(Some(ApiError::Decode("niepoprawna stawka godzinowa".into())));
                return;
            }
        };
        submit_action.dispatch(EmployeeRequest {
            name: name.get_untracked(),
            lastname: lastname.get_untracked(),
            email: email.get_untracked(),
            pesel: pesel.get_untracked(),
            phone: phone.get_untracked(),
            date_of_birth: date_of_birth.get_untracked(),
            sex: sex.get_untracked(),
            role: role.get_untracked(),
            username: username.get_untracked(),
            password: password.get_untracked(),
            hired_on: hired_on.get_untracked(),
            hourly_rate: rate,
            work_time: work_time.get_untracked(),
            settlement_kind: settlement_kind.get_untracked(),
        });
    };

    let text_input = move |label: &'static str, signal: RwSignal<String>, kind: &'static str| {
        view! {
            <div>
                <label class="block text-sm font-medium text-gray-700">{label}</label>
                <input
                    type=kind
                    class="mt-1 block w-full border-gray-300 rounded-md shadow-sm"
                    prop:value={move || signal.get()}
                    on:input=move |ev| signal.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <form class="bg-white shadow rounded-lg p-6 space-y-4" on:submit=on_submit>
            <h3 class="text-base font-semibold text-gray-900">"Nowy pracownik"</h3>
            <ErrorMessage error={Signal::derive(move || error.get())} />
            <SuccessMessage message={Signal::derive(move || success.get())} />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {text_input("Imię", name, "text")}
                {text_input("Nazwisko", lastname, "text")}
                {text_input("E-mail", email, "email")}
                {text_input("PESEL", pesel, "text")}
                {text_input("Telefon", phone, "text")}
                {text_input("Data urodzenia", date_of_birth, "date")}
                {text_input("Nazwa użytkownika", username, "text")}
                {text_input("Hasło", password, "password")}
                {text_input("Data zatrudnienia", hired_on, "date")}
                {text_input("Stawka godzinowa", hourly_rate, "number")}
                <div>
                    <label class="block text-sm font-medium text-gray-700">"Płeć"</label>
                    <select
                        class="mt-1 block w-full border-gray-300 rounded-md shadow-sm"
                        on:change=move |ev| sex.set(event_target_value(&ev))
                    >
                        <option value="K" selected=move || sex.get() == "K">"Kobieta"</option>
                        <option value="M" selected=move || sex.get() == "M">"Mężczyzna"</option>
                    </select>
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">"Rola"</label>
                    <select
                        class="mt-1 block w-full border-gray-300 rounded-md shadow-sm"
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value="USER" selected=move || role.get() == "USER">"Pracownik"</option>
                        <option value="HR" selected=move || role.get() == "HR">"Kadry"</option>
                    </select>
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">"Wymiar pracy"</label>
                    <select
                        class="mt-1 block w-full border-gray-300 rounded-md shadow-sm"
                        on:change=move |ev| work_time.set(event_target_value(&ev))
                    >
                        <option value="PEŁNY_ETAT">"Pełny etat"</option>
                        <option value="POŁOWA_ETATU">"Pół etatu"</option>
                    </select>
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">"Rodzaj rozliczenia"</label>
                    <select
                        class="mt-1 block w-full border-gray-300 rounded-md shadow-sm"
                        on:change=move |ev| settlement_kind.set(event_target_value(&ev))
                    >
                        <option value="GODZINOWY">"Godzinowy"</option>
                        <option value="MIESIĘCZNY">"Miesięczny"</option>
                    </select>
                </div>
            </div>
            <Button loading={pending} attr:type="submit">"Dodaj"</Button>
        </form>
    }
}

#[component]
pub fn ProfilesPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let reload = create_rw_signal(0u32);
    let show_form = create_rw_signal(false);

    let employees_resource = create_resource(
        move || reload.get(),
        move |_| {
            let api = api.clone();
            async move { api.get_employees().await }
        },
    );
    let loading = employees_resource.loading();
    let error = Signal::derive(move || employees_resource.get().and_then(|result| result.err()));
    let employees = Signal::derive(move || {
        employees_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold text-gray-900">"Pracownicy"</h1>
                    <Button on:click=move |_| show_form.update(|open| *open = !*open)>
                        {move || if show_form.get() { "Ukryj formularz" } else { "Dodaj pracownika" }}
                    </Button>
                </div>

                <Show when=move || show_form.get()>
                    <EmployeeForm on_created={Callback::new(move |_| reload.update(|n| *n += 1))} />
                </Show>

                <ErrorMessage error={error} />
                <Show when=move || loading.get()>
                    <LoadingSpinner />
                </Show>

                <div class="bg-white shadow overflow-hidden sm:rounded-md">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Pracownik"</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"E-mail"</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Zatrudniony"</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Urlop (dostępny/wykorzystany)"</th>
                                <th class="px-6 py-3"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200">
                            <For
                                each=move || employees.get()
                                key=|employee| employee.id
                                children=move |employee: EmployeeBasicResponse| {
                                    let detail_href = format!("/profiles/{}", employee.id);
                                    view! {
                                        <tr>
                                            <td class="px-6 py-4 text-sm font-medium text-gray-900">{employee.full_name()}</td>
                                            <td class="px-6 py-4 text-sm text-gray-500">{employee.email.clone()}</td>
                                            <td class="px-6 py-4 text-sm text-gray-500">{employee.hired_on.clone().unwrap_or_else(|| "-".into())}</td>
                                            <td class="px-6 py-4 text-sm text-gray-500">
                                                {format!("{} / {}", employee.leave_days_available, employee.leave_days_used)}
                                            </td>
                                            <td class="px-6 py-4 text-sm text-right">
                                                <a href=detail_href class="text-indigo-600 hover:text-indigo-900">"Szczegóły"</a>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </Layout>
    }
}

#[component]
pub fn ProfileDetailPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let params = use_params_map();
    let employee_id = create_memo(move |_| {
        params
            .with(|p| p.get("id").cloned())
            .and_then(|raw| raw.parse::<i64>().ok())
    });

    let employee_resource = create_resource(
        move || employee_id.get(),
        move |id| {
            let api = api.clone();
            async move {
                match id {
                    Some(id) => api.get_employee(id).await.map(Some),
                    None => Ok(None),
                }
            }
        },
    );
    let loading = employee_resource.loading();
    let error = Signal::derive(move || employee_resource.get().and_then(|result| result.err()));
    let employee = Signal::derive(move || {
        employee_resource
            .get()
            .and_then(|result| result.ok())
            .flatten()
    });

    let field = |label: &'static str, value: String| {
        view! {
            <div>
                <dt class="text-sm font-medium text-gray-500">{label}</dt>
                <dd class="mt-1 text-sm text-gray-900">{value}</dd>
            </div>
        }
    };

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold text-gray-900">
                        {move || {
                            employee
                                .get()
                                .map(|e| e.full_name())
                                .unwrap_or_else(|| "Profil pracownika".into())
                        }}
                    </h1>
                    <a href="/profiles" class="text-sm text-indigo-600 hover:text-indigo-900">"Wróć do listy"</a>
                </div>

                <ErrorMessage error={error} />
                <Show when=move || loading.get()>
                    <LoadingSpinner />
                </Show>

                {move || {
                    employee
                        .get()
                        .map(|e| {
                            view! {
                                <dl class="bg-white shadow rounded-lg p-6 grid grid-cols-1 md:grid-cols-3 gap-4">
                                    {field("E-mail", e.email.clone())}
                                    {field("Telefon", e.phone.clone())}
                                    {field("PESEL", e.pesel.clone())}
                                    {field("Data urodzenia", e.date_of_birth.clone().unwrap_or_else(|| "-".into()))}
                                    {field("Data zatrudnienia", e.hired_on.clone().unwrap_or_else(|| "-".into()))}
                                    {field("Data zwolnienia", e.terminated_on.clone().unwrap_or_else(|| "-".into()))}
                                    {field("Stawka godzinowa", format!("{:.2} zł", e.hourly_rate))}
                                    {field("Wymiar pracy", e.work_time.replace('_', " "))}
                                    {field("Rodzaj rozliczenia", e.settlement_kind.replace('_', " "))}
                                    {field("Staż (lata)", e.seniority_years.to_string())}
                                    {field("Dostępne dni urlopu", e.leave_days_available.to_string())}
                                    {field("Wykorzystane dni urlopu", e.leave_days_used.to_string())}
                                </dl>
                            }
                            .into_view()
                        })
                        .unwrap_or_else(|| ().into_view())
                }}
            </div>
        </Layout>
    }
}
