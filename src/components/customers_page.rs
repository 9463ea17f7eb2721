/// Customers page: fetch-on-mount, card grid, create/edit modal, delete.
/// Local state is a throwaway cache; every mutation is followed by a refetch
/// of the canonical list.
use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::*;

use crate::components::{button::Button, card::Card, input::TextInput, modal::Modal};
use crate::models::customer::{Customer, CustomerRequest};
use crate::services::customers as customer_service;
use crate::utils::dialog::Dialogs;

const DELETE_CUSTOMER_PROMPT: &str = "Are you sure you want to delete this customer?";

/// Controlled form state for the create/edit modal. Updates go through
/// `with_field` and return a fresh draft instead of mutating in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CustomerField {
    Name,
    Email,
    Phone,
}

impl CustomerDraft {
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone().unwrap_or_default(),
        }
    }

    pub fn with_field(mut self, field: CustomerField, value: String) -> Self {
        match field {
            CustomerField::Name => self.name = value,
            CustomerField::Email => self.email = value,
            CustomerField::Phone => self.phone = value,
        }
        self
    }

    pub fn into_request(self) -> CustomerRequest {
        let phone = self.phone.trim();
        CustomerRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
        }
    }
}

fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

// Timestamps arrive as sqlite text ("2024-03-07 12:30:00"); RFC 3339 covers
// payloads from other backends. Anything else renders as-is.
fn format_join_date(raw: &str) -> String {
    if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return parsed.format("%b %-d, %Y").to_string();
    }
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}

#[component]
pub fn CustomersPage() -> impl IntoView {
    let dialogs = store_value(use_context::<Dialogs>().unwrap_or_default());
    let (customers, set_customers) = create_signal(Vec::<Customer>::new());
    let (loading, set_loading) = create_signal(true);
    let (modal_open, set_modal_open) = create_signal(false);
    let (editing, set_editing) = create_signal(None::<Customer>);
    let (draft, set_draft) = create_signal(CustomerDraft::default());
    let (submitting, set_submitting) = create_signal(false);

    let fetch_customers = move || {
        spawn_local(async move {
            match customer_service::get_all().await {
                Ok(list) => {
                    log!("[UI] Loaded {} customers", list.len());
                    set_customers.set(list);
                }
                Err(err) => leptos::logging::error!("[UI] Failed to fetch customers: {err}"),
            }
            set_loading.set(false);
        });
    };

    create_effect(move |_| {
        fetch_customers();
    });

    let reset_form = move || {
        set_editing.set(None);
        set_draft.set(CustomerDraft::default());
    };

    let open_edit = move |customer: Customer| {
        set_draft.set(CustomerDraft::from_customer(&customer));
        set_editing.set(Some(customer));
        set_modal_open.set(true);
    };

    // Canceling the modal discards any edits along with it.
    let close_modal = Callback::new(move |_| {
        set_modal_open.set(false);
        reset_form();
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);
        spawn_local(async move {
            let request = draft.get_untracked().into_request();
            let saved = match editing.get_untracked() {
                Some(customer) => customer_service::update(&customer.id, &request)
                    .await
                    .map(|_| ()),
                None => customer_service::create(&request).await.map(|_| ()),
            };
            match saved {
                Ok(()) => {
                    set_modal_open.set(false);
                    reset_form();
                    fetch_customers();
                }
                Err(err) => {
                    leptos::logging::error!("[UI] Failed to save customer: {err}");
                    dialogs.with_value(|d| d.notify("Failed to save customer"));
                }
            }
            set_submitting.set(false);
        });
    };

    let handle_delete = move |id: String| {
        if !dialogs.with_value(|d| d.confirm(DELETE_CUSTOMER_PROMPT)) {
            return;
        }
        spawn_local(async move {
            match customer_service::delete(&id).await {
                Ok(()) => fetch_customers(),
                Err(err) => leptos::logging::error!("[UI] Failed to delete customer: {err}"),
            }
        });
    };

    let modal_title = Signal::derive(move || {
        if editing.get().is_some() {
            "Edit Customer".to_string()
        } else {
            "Add New Customer".to_string()
        }
    });

    view! {
        <div class="page-body">
            <div class="page-header">
                <div>
                    <h1>{ "Customers" }</h1>
                    <p class="page-subtitle">{ "Manage your customer base" }</p>
                </div>
                <Button on_press=Callback::new(move |_| set_modal_open.set(true))>
                    { "Add Customer" }
                </Button>
            </div>

            {move || {
                if loading.get() {
                    return view! {
                        <div class="page-loading"><span class="spinner"></span></div>
                    }
                        .into_view();
                }
                let list = customers.get();
                if list.is_empty() {
                    view! {
                        <div class="empty-state">
                            { "No customers found. Add your first customer!" }
                        </div>
                    }
                        .into_view()
                } else {
                    view! {
                        <div class="customer-grid">
                            {list
                                .into_iter()
                                .map(|customer| {
                                    let edit_target = customer.clone();
                                    let delete_id = customer.id.clone();
                                    let phone = customer
                                        .phone
                                        .clone()
                                        .filter(|p| !p.is_empty())
                                        .unwrap_or_else(|| "No phone".to_string());
                                    let email = if customer.email.is_empty() {
                                        "No email".to_string()
                                    } else {
                                        customer.email.clone()
                                    };
                                    view! {
                                        <Card class="customer-card">
                                            <div class="customer-card-top">
                                                <div class="customer-actions">
                                                    <button
                                                        type="button"
                                                        class="icon-button"
                                                        title="Edit"
                                                        on:click=move |_| open_edit(edit_target.clone())
                                                    >
                                                        {"\u{270E}"}
                                                    </button>
                                                    <button
                                                        type="button"
                                                        class="icon-button"
                                                        title="Delete"
                                                        on:click=move |_| handle_delete(delete_id.clone())
                                                    >
                                                        {"\u{1F5D1}"}
                                                    </button>
                                                </div>
                                                <div class="customer-avatar">{initial(&customer.name)}</div>
                                            </div>
                                            <div class="customer-card-body">
                                                <h3>{customer.name.clone()}</h3>
                                                <div class="customer-meta">
                                                    <span>{email}</span>
                                                    <span>{phone}</span>
                                                    <span>{format!("Joined: {}", format_join_date(&customer.created_at))}</span>
                                                </div>
                                            </div>
                                        </Card>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_view()
                }
            }}

            <Modal open=modal_open on_close=close_modal title=modal_title>
                <form class="form" on:submit=handle_submit>
                    <TextInput
                        label="Full Name"
                        value=Signal::derive(move || draft.get().name)
                        on_input=Callback::new(move |value| {
                            set_draft.set(draft.get_untracked().with_field(CustomerField::Name, value))
                        })
                        placeholder="e.g. John Doe"
                        required=true
                    />
                    <TextInput
                        label="Email Address"
                        input_type="email"
                        value=Signal::derive(move || draft.get().email)
                        on_input=Callback::new(move |value| {
                            set_draft.set(draft.get_untracked().with_field(CustomerField::Email, value))
                        })
                        placeholder="john@example.com"
                        required=true
                    />
                    <TextInput
                        label="Phone Number"
                        input_type="tel"
                        value=Signal::derive(move || draft.get().phone)
                        on_input=Callback::new(move |value| {
                            set_draft.set(draft.get_untracked().with_field(CustomerField::Phone, value))
                        })
                        placeholder="+1 234 567 890"
                    />
                    <div class="form-footer">
                        <Button variant="secondary" on_press=close_modal>
                            { "Cancel" }
                        </Button>
                        <Button button_type="submit" loading=submitting>
                            {move || {
                                if editing.get().is_some() {
                                    "Update Customer"
                                } else {
                                    "Create Customer"
                                }
                            }}
                        </Button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::dialog::testing::RecordingDialogs;

    fn customer() -> Customer {
        Customer {
            id: "c1".into(),
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: Some("+44 20 7946 0000".into()),
            created_at: "2024-03-07 12:30:00".into(),
        }
    }

    #[test]
    fn with_field_updates_one_field_at_a_time() {
        let draft = CustomerDraft::default()
            .with_field(CustomerField::Name, "Ada".into())
            .with_field(CustomerField::Email, "ada@example.com".into())
            .with_field(CustomerField::Phone, "+44".into());
        assert_eq!(
            draft,
            CustomerDraft {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                phone: "+44".into(),
            }
        );
    }

    #[test]
    fn from_customer_prefills_every_field() {
        let draft = CustomerDraft::from_customer(&customer());
        assert_eq!(draft.name, "Ada Lovelace");
        assert_eq!(draft.email, "ada@example.com");
        assert_eq!(draft.phone, "+44 20 7946 0000");
    }

    #[test]
    fn from_customer_maps_missing_phone_to_empty() {
        let mut c = customer();
        c.phone = None;
        assert_eq!(CustomerDraft::from_customer(&c).phone, "");
    }

    #[test]
    fn into_request_trims_and_drops_blank_phone() {
        let request = CustomerDraft {
            name: "  Ada ".into(),
            email: " ada@example.com".into(),
            phone: "   ".into(),
        }
        .into_request();
        assert_eq!(request.name, "Ada");
        assert_eq!(request.email, "ada@example.com");
        assert_eq!(request.phone, None);
    }

    #[test]
    fn reset_restores_a_blank_draft() {
        let edited = CustomerDraft::from_customer(&customer());
        assert_ne!(edited, CustomerDraft::default());
        assert_eq!(CustomerDraft::default().name, "");
    }

    #[test]
    fn delete_is_gated_on_the_confirmation_prompt() {
        let recorder = RecordingDialogs::answering(false);
        let dialogs = Dialogs::new(recorder.clone());
        assert!(!dialogs.confirm(DELETE_CUSTOMER_PROMPT));
        assert_eq!(
            recorder.confirms.borrow().as_slice(),
            [DELETE_CUSTOMER_PROMPT]
        );
    }

    #[test]
    fn initial_uppercases_the_first_character() {
        assert_eq!(initial("ada"), "A");
        assert_eq!(initial("Ümit"), "Ü");
        assert_eq!(initial(""), "");
    }

    #[test]
    fn join_dates_format_from_sqlite_and_rfc3339() {
        assert_eq!(format_join_date("2024-03-07 12:30:00"), "Mar 7, 2024");
        assert_eq!(format_join_date("2024-03-07T12:30:00+00:00"), "Mar 7, 2024");
        assert_eq!(format_join_date("not a date"), "not a date");
    }
}
