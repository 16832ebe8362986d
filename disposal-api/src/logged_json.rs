//! JSON data guard that logs each decoded request body.
//!
//! `LoggedJson<T>` decodes exactly like Rocket's `Json<T>` (including the 422
//! on malformed bodies) and then writes the payload to the log, which is
//! handy when a client disputes what it sent.

use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket::{
    Data, Request,
    data::{self, FromData},
};

pub struct LoggedJson<T>(pub T);

impl<T> LoggedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for LoggedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r, T: Deserialize<'r> + Serialize> FromData<'r> for LoggedJson<T> {
    type Error = rocket::serde::json::Error<'r>;

    async fn from_data(req: &'r Request<'_>, data: Data<'r>) -> data::Outcome<'r, Self> {
        match Json::<T>::from_data(req, data).await {
            data::Outcome::Success(json) => {
                let body = serde_json::to_string(&json.0)
                    .unwrap_or_else(|_| "<failed to serialize>".to_string());
                info!("{} {} | body: {}", req.method(), req.uri().path(), body);
                data::Outcome::Success(LoggedJson(json.into_inner()))
            }
            data::Outcome::Error(e) => {
                warn!("{} {} | rejected body: {:?}", req.method(), req.uri().path(), e.1);
                data::Outcome::Error(e)
            }
            data::Outcome::Forward(f) => data::Outcome::Forward(f),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for LoggedJson<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
