#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;
pub(crate) mod ledger;

pub(crate) use form::{
    assert_form_input, assert_form_submit_button_with_text, assert_hx_endpoint, must_get_form,
};
pub(crate) use html::{assert_valid_html, parse_html_document, parse_html_fragment};
pub(crate) use http::{assert_hx_redirect, assert_hx_refresh, assert_status_ok};
pub(crate) use ledger::{add_test_transaction, get_test_ledger};
