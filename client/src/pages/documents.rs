//! Document library with search, type filter, and the upload dialog.

use leptos::logging::{log, warn};
use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::button::{Button, ButtonVariant};
use crate::components::card::Card;
use crate::components::modal::Modal;
use crate::components::stat_card::StatCard;
use crate::components::text_input::TextInput;
use crate::state::documents::{
    ACCEPTED_EXTENSIONS, DOCUMENT_CATEGORIES, Document, DocumentKind, DocumentsAction, DocumentsState, TypeFilter,
    UploadDraft, validate_upload,
};
use crate::util::clock::current_year_month;
use crate::util::dispatch::dispatch;
use crate::util::file_input::selected_file_name;

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let documents = expect_context::<RwSignal<DocumentsState>>();
    let show_upload = RwSignal::new(false);
    let month = current_year_month();

    view! {
        <div class="documents-page">
            <div class="page-intro page-intro--with-action">
                <div>
                    <h2>"Documents"</h2>
                    <p>"Manage pet documents"</p>
                </div>
                <Button on_click=Callback::new(move |()| show_upload.set(true))>"⭱ Upload Document"</Button>
            </div>

            <div class="stat-grid stat-grid--three">
                <StatCard
                    title="Total Documents"
                    value=Signal::derive(move || documents.with(DocumentsState::total).to_string())
                    subtitle="Files Stored"
                />
                <StatCard
                    title="Images"
                    value=Signal::derive(move || documents.with(DocumentsState::image_count).to_string())
                    subtitle="Pet Images"
                />
                <StatCard
                    title="This month"
                    value=Signal::derive(move || documents.with(|d| d.uploaded_in(&month)).to_string())
                    subtitle="New Uploads"
                />
            </div>

            <div class="documents-page__filters">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search Documents....."
                    prop:value=move || documents.with(|d| d.search.clone())
                    on:input=move |ev| {
                        dispatch(documents, DocumentsAction::SetSearch(event_target_value(&ev)));
                    }
                />
                <select
                    class="filter-select"
                    prop:value=move || documents.with(|d| d.type_filter.label())
                    on:change=move |ev| {
                        if let Some(filter) = TypeFilter::from_label(&event_target_value(&ev)) {
                            dispatch(documents, DocumentsAction::SetTypeFilter(filter));
                        }
                    }
                >
                    {TypeFilter::ALL
                        .into_iter()
                        .map(|f| view! { <option value=f.label()>{f.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            <div class="documents-page__grid">
                {move || {
                    documents
                        .with(|d| d.visible().into_iter().cloned().collect::<Vec<_>>())
                        .into_iter()
                        .map(|doc| view! { <DocumentCard doc/> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Show when=move || show_upload.get()>
                <UploadDialog on_close=Callback::new(move |()| show_upload.set(false))/>
            </Show>
        </div>
    }
}

#[component]
fn DocumentCard(doc: Document) -> impl IntoView {
    let Document { id, name, kind, category, owner, size, date } = doc;
    let icon = match kind {
        DocumentKind::Image => "🖼",
        DocumentKind::Pdf => "📄",
    };
    let view_id = id.clone();

    view! {
        <Card class="document-card">
            <div class="document-card__header">
                <span class="document-card__icon" aria-hidden="true">{icon}</span>
                <div>
                    <h3 class="document-card__name">{name}</h3>
                    <div class="document-card__tags">
                        <Badge label=category/>
                        <Badge label=kind.label().to_uppercase()/>
                    </div>
                </div>
            </div>
            <div class="document-card__meta">
                <p>{owner}</p>
                <div class="document-card__row">
                    <span>{size}</span>
                    <span>{date}</span>
                </div>
            </div>
            <div class="document-card__actions">
                <Button
                    variant=ButtonVariant::Secondary
                    on_click=Callback::new(move |()| log!("view document {view_id}"))
                >
                    "👁 View"
                </Button>
                <Button on_click=Callback::new(move |()| log!("download document {id}"))>"⭳ Download"</Button>
            </div>
        </Card>
    }
}

#[component]
fn UploadDialog(on_close: Callback<()>) -> impl IntoView {
    let pet_name = RwSignal::new(String::new());
    let owner_name = RwSignal::new(String::new());
    let category = RwSignal::new(DOCUMENT_CATEGORIES[0].to_owned());
    let file_name = RwSignal::new(None::<String>);

    let submit = Callback::new(move |()| {
        let draft = UploadDraft {
            pet_name: pet_name.get_untracked(),
            owner_name: owner_name.get_untracked(),
            category: category.get_untracked(),
            file_name: file_name.get_untracked(),
        };
        match validate_upload(&draft) {
            Ok(request) => {
                let summary = serde_json::to_string(&request).unwrap_or_default();
                log!("documents upload form: {summary}");
                on_close.run(());
            }
            Err(err) => warn!("documents upload rejected: {err}"),
        }
    });

    view! {
        <Modal title="Upload Document" on_close>
            <div class="dialog__body">
                <TextInput label="Pet Name" value=pet_name placeholder="Enter pet name"/>
                <TextInput label="Owner Name" value=owner_name placeholder="Enter owner name"/>
                <label class="field">
                    <span class="field__label">"Category"</span>
                    <select
                        class="field__input"
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        {DOCUMENT_CATEGORIES
                            .into_iter()
                            .map(|c| view! { <option value=c>{c}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"Select File"</span>
                    <input
                        class="field__input"
                        type="file"
                        accept=ACCEPTED_EXTENSIONS
                        on:change=move |ev| file_name.set(selected_file_name(&ev))
                    />
                    <span class="field__hint">"Supported formats: PDF, JPG, PNG"</span>
                </label>
            </div>
            <div class="dialog__actions">
                <Button variant=ButtonVariant::Secondary on_click=on_close>"Cancel"</Button>
                <Button on_click=submit>"Upload Document"</Button>
            </div>
        </Modal>
    }
}
