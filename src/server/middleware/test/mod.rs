use crate::server::model::principal::Principal;

mod auth;

fn principal() -> Principal {
    Principal {
        id: 583231,
        login: "octocat".to_string(),
        name: Some("The Octocat".to_string()),
        email: Some("octocat@github.com".to_string()),
        avatar_url: None,
    }
}
