use super::super::format::{classification_badge, normalize_name};
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_date_short;
use crate::shared::export::{csv_filename, export_to_csv};
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::domain::a001_user::{SortDirection, UserRecord, UserSortField};
use leptos::prelude::*;
use thaw::*;

/// Таблица загруженной страницы пользователей с выгрузкой в CSV
#[component]
pub fn UsersTable(
    #[prop(into)] users: Signal<Vec<UserRecord>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] sort_field: Signal<UserSortField>,
    #[prop(into)] sort_direction: Signal<SortDirection>,
    on_sort: Callback<UserSortField>,
) -> impl IntoView {
    let is_empty = Signal::derive(move || users.with(|u| u.is_empty()));

    let download_csv = move |_| {
        let data = users.get_untracked();
        if data.is_empty() {
            return;
        }
        let filename = csv_filename("users", Utc::now());
        if let Err(e) = export_to_csv(&data, &filename) {
            log::error!("CSV export failed: {}", e);
        }
    };

    view! {
        <div class="table-card">
            <div class="table-card__toolbar">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=download_csv
                    disabled=is_empty
                >
                    {icon("download")}
                    " Download CSV"
                </Button>
            </div>

            {move || {
                if loading.get() {
                    view! {
                        <div class="table-card__placeholder">
                            <Spinner />
                        </div>
                    }
                    .into_any()
                } else if is_empty.get() {
                    view! {
                        <div class="table-card__placeholder">"No users found"</div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="table-wrapper">
                            <Table attr:style="width: 100%;">
                                <TableHeader>
                                    <TableRow>
                                        {UserSortField::ALL
                                            .into_iter()
                                            .map(|field| {
                                                view! {
                                                    <SortableHeaderCell
                                                        label=field.label()
                                                        sort_field=field
                                                        current_sort_field=sort_field
                                                        sort_direction=sort_direction
                                                        on_sort=on_sort
                                                        min_width=140.0
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <For
                                        each=move || users.get()
                                        key=|u| u.id.clone()
                                        children=move |user| {
                                            let variant = classification_badge(&user.phone);
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            <span style="font-weight: 500;">{normalize_name(&user.name)}</span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            {user.email.clone()}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <Badge variant=variant>{user.phone.clone()}</Badge>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            {format_date_short(&user.created_at)}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        }
                                    />
                                </TableBody>
                            </Table>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
