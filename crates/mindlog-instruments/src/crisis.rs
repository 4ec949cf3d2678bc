//! Crisis-resource payload attached to a submission that trips an
//! instrument's crisis indicator. It takes priority over every other
//! recommendation the API returns.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CrisisResource {
    pub name: String,
    pub contact: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CrisisPayload {
    pub alert: bool,
    pub title: String,
    pub message: String,
    pub resources: Vec<CrisisResource>,
}

pub fn crisis_resources() -> CrisisPayload {
    let resource = |name: &str, contact: &str, description: &str| CrisisResource {
        name: name.to_string(),
        contact: contact.to_string(),
        description: description.to_string(),
    };

    CrisisPayload {
        alert: true,
        title: "Immediate Support Available".to_string(),
        message: "We noticed you're having thoughts of harming yourself. \
                  You're not alone, and help is available."
            .to_string(),
        resources: vec![
            resource(
                "988 Suicide & Crisis Lifeline",
                "Call or text 988",
                "24/7 free and confidential support",
            ),
            resource(
                "Crisis Text Line",
                "Text HOME to 741741",
                "Free crisis counseling via text",
            ),
            resource(
                "International Association for Suicide Prevention",
                "https://www.iasp.info/resources/Crisis_Centres/",
                "Find help in your country",
            ),
        ],
    }
}
