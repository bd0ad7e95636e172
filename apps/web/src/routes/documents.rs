//! Documents on file. Uploads are kept in page state only.

use super::PageHeader;
use crate::app_lib::{clock, theme::Theme};
use crate::components::{Alert, AlertKind, AppShell, Badge, Card, Tone};
use crate::features::auth::RequireAuth;
use leptos::ev::Event;
use leptos::prelude::*;
use loan_core::{
    AppRoute,
    dashboard::{DocumentRecord, DocumentStatus, format_date, uploaded_documents},
};
use web_sys::HtmlInputElement;

#[component]
pub fn DocumentsPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <DocumentsContent />
            </RequireAuth>
        </AppShell>
    }
}

/// Upper-case extension, or `FILE` when there is none.
fn file_kind(file_name: &str) -> String {
    file_name
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_ascii_uppercase())
        .filter(|extension| !extension.is_empty())
        .unwrap_or_else(|| "FILE".to_string())
}

fn size_in_mb(bytes: f64) -> String {
    format!("{:.1} MB", bytes / (1024.0 * 1024.0))
}

#[component]
fn DocumentsContent() -> impl IntoView {
    let documents = RwSignal::new(uploaded_documents());
    let (notice, set_notice) = signal::<Option<(&'static str, String)>>(None);

    let on_upload = move |event: Event| {
        let input = event_target::<HtmlInputElement>(&event);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            let name = file.name();
            let record = DocumentRecord {
                id: format!("upload-{}", clock::now_millis()),
                kind: file_kind(&name),
                size: size_in_mb(file.size()),
                uploaded: clock::today(),
                status: DocumentStatus::Pending,
                name: name.clone(),
            };
            tracing::info!(kind = %record.kind, "document uploaded");
            documents.update(|documents| documents.push(record));
            set_notice.set(Some((
                "Document Uploaded",
                format!("{name} has been uploaded and is awaiting verification."),
            )));
        }
        input.set_value("");
    };

    view! {
        <div class="flex flex-wrap items-start justify-between gap-4">
            <PageHeader route=AppRoute::Documents subtitle="Manage the documents supporting your loan" />
            <label
                for="documentUpload"
                class="inline-flex items-center gap-2 cursor-pointer text-white bg-blue-700 hover:bg-blue-800 font-medium rounded-lg text-sm px-5 py-2.5"
            >
                <span class="material-symbols-outlined text-base">"upload"</span>
                "Upload Document"
            </label>
            <input
                id="documentUpload"
                type="file"
                class="hidden"
                accept=".pdf,.jpg,.jpeg,.png"
                on:change=on_upload
            />
        </div>

        {move || {
            notice
                .get()
                .map(|(title, message)| {
                    view! {
                        <div class="mb-4">
                            <Alert kind=AlertKind::Info title=title message=message />
                        </div>
                    }
                })
        }}

        <Card title="Required Documents">
            <div class="overflow-x-auto">
                <table class=Theme::TABLE>
                    <thead class=Theme::TABLE_HEAD>
                        <tr>
                            <th class="px-6 py-3">"Document Name"</th>
                            <th class="px-6 py-3">"Type"</th>
                            <th class="px-6 py-3">"Size"</th>
                            <th class="px-6 py-3">"Upload Date"</th>
                            <th class="px-6 py-3">"Status"</th>
                            <th class="px-6 py-3">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || documents.get()
                            key=|document| document.id.clone()
                            children=move |document| {
                                let view_name = document.name.clone();
                                let download_name = document.name.clone();
                                view! {
                                    <tr class="bg-white border-b dark:bg-gray-800 dark:border-gray-700">
                                        <td class=format!("{} font-medium text-gray-900 dark:text-white", Theme::ROW)>
                                            <span class="material-symbols-outlined align-middle mr-2 text-gray-400">
                                                "description"
                                            </span>
                                            {document.name}
                                        </td>
                                        <td class=Theme::ROW>{document.kind}</td>
                                        <td class=Theme::ROW>{document.size}</td>
                                        <td class=Theme::ROW>{format_date(document.uploaded)}</td>
                                        <td class=Theme::ROW>
                                            <Badge
                                                tone=Tone::from(document.status)
                                                label=document.status.label()
                                            />
                                        </td>
                                        <td class=format!("{} flex gap-3", Theme::ROW)>
                                            <button
                                                type="button"
                                                class=Theme::LINK
                                                on:click=move |_| {
                                                    set_notice
                                                        .set(Some(("View Document", format!("Viewing {view_name}..."))))
                                                }
                                            >
                                                "View"
                                            </button>
                                            <button
                                                type="button"
                                                class=Theme::LINK
                                                on:click=move |_| {
                                                    set_notice
                                                        .set(
                                                            Some((
                                                                "Download Started",
                                                                format!("Downloading {download_name}..."),
                                                            )),
                                                        )
                                                }
                                            >
                                                "Download"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::{file_kind, size_in_mb};

    #[test]
    fn kind_comes_from_the_extension() {
        assert_eq!(file_kind("letter.pdf"), "PDF");
        assert_eq!(file_kind("scan.final.jpeg"), "JPEG");
        assert_eq!(file_kind("README"), "FILE");
        assert_eq!(file_kind("trailing."), "FILE");
    }

    #[test]
    fn sizes_are_reported_in_megabytes() {
        assert_eq!(size_in_mb(1_258_291.0), "1.2 MB");
    }
}
