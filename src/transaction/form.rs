//! The form for adding a transaction.

use maud::{Markup, html};
use time::Date;

use crate::{
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, loading_spinner},
    transaction::format_date,
};

/// Render the add transaction form.
///
/// `redirect_url` is sent back with the form so the client returns to the page
/// it came from. The date input defaults to `today`.
pub(crate) fn transaction_form(redirect_url: &str, today: Date) -> Markup {
    html! {
        form
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-target-error="#alert-container"
            hx-disabled-elt="find button"
            hx-indicator="#indicator"
            class="w-full space-y-4"
        {
            div
            {
                label for="label" class=(FORM_LABEL_STYLE) { "Label" }

                input
                    id="label"
                    name="label"
                    type="text"
                    placeholder="Enter label..."
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE)
                {
                    "Amount "
                    span class="font-normal text-gray-500 dark:text-gray-400"
                    {
                        "(negative for expenses, positive for income)"
                    }
                }

                input
                    id="amount"
                    name="amount"
                    type="number"
                    step="0.01"
                    placeholder="Enter amount..."
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                input
                    id="date"
                    name="date"
                    type="date"
                    value=(format_date(today))
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            input type="hidden" name="redirect_url" value=(redirect_url);

            button type="submit" id="indicator" class=(BUTTON_PRIMARY_STYLE)
            {
                span class="htmx-indicator" { (loading_spinner()) }
                "Add transaction"
            }
        }
    }
}
