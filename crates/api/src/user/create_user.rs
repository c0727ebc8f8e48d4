use crate::error::ReminderError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use renewal_reminder_api_structs::create_user::*;
use renewal_reminder_domain::User;
use renewal_reminder_infra::Context;

pub async fn create_user_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ReminderError> {
    let usecase = CreateUserUseCase {
        name: body.0.name,
        email: body.0.email,
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Created().json(APIResponse::new(usecase_res.user)))
        .map_err(ReminderError::from)
}

#[derive(Debug)]
pub struct CreateUserUseCase {
    pub name: String,
    pub email: String,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub user: User,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    InvalidName,
}

impl From<UseCaseError> for ReminderError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::InvalidName => {
                Self::BadClientData("The user name must not be empty.".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateUserUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "CreateUser";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if self.name.trim().is_empty() {
            return Err(UseCaseError::InvalidName);
        }
        let user = User::new(self.name.clone(), self.email.clone());

        let res = ctx.repos.users.insert(&user).await;
        match res {
            Ok(_) => Ok(UseCaseRes { user }),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_user() {
        let ctx = Context::create_inmemory();
        let usecase = CreateUserUseCase {
            name: "Rania".into(),
            email: "rania@example.com".into(),
        };
        let res = execute(usecase, &ctx).await;
        assert!(res.is_ok());
        let user = res.unwrap().user;
        assert!(ctx.repos.users.find(&user.id).await.is_some());
    }

    #[tokio::test]
    async fn rejects_empty_name() {
        let ctx = Context::create_inmemory();
        let usecase = CreateUserUseCase {
            name: "  ".into(),
            email: "rania@example.com".into(),
        };
        assert!(execute(usecase, &ctx).await.is_err());
    }
}
