//! The list of transactions shown on the dashboard and transactions pages.

use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    html::{BUTTON_DELETE_STYLE, LIST_ITEM_STYLE},
    view::TransactionRow,
};

/// The HTML element ID of the element that wraps the transaction list.
pub(crate) const TRANSACTION_LIST_ID: &str = "transaction-list";

/// Render `rows` as a list with a delete button for each transaction.
///
/// `empty_message` is shown instead when there are no rows.
pub(crate) fn transaction_list(rows: &[TransactionRow], empty_message: &str) -> Markup {
    if rows.is_empty() {
        return html! {
            p class="py-6 text-center text-sm text-gray-500 dark:text-gray-400"
            {
                (empty_message)
            }
        };
    }

    html! {
        ul class="w-full rounded-lg overflow-hidden shadow-md"
        {
            @for row in rows {
                li class=(LIST_ITEM_STYLE) data-transaction-id=(row.id)
                {
                    div class="flex flex-col min-w-0"
                    {
                        span class="font-medium truncate" { (row.label) }
                        time
                            datetime=(row.date)
                            class="text-xs text-gray-500 dark:text-gray-400"
                        {
                            (row.date)
                        }
                    }

                    div class="flex items-center gap-4"
                    {
                        span class={"font-semibold " (row.kind.css_class())}
                        {
                            (row.amount_text)
                        }

                        button
                            hx-delete=(format_endpoint(endpoints::TRANSACTION, row.id))
                            hx-confirm={"Are you sure you want to delete '" (row.label) "'?"}
                            hx-target="closest li"
                            hx-target-error="#alert-container"
                            hx-swap="delete"
                            aria-label={"Delete " (row.label)}
                            class=(BUTTON_DELETE_STYLE)
                        {
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
