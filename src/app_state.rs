use crate::mailing_list::MailingList;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub mailing_list: Arc<dyn MailingList>,
}
