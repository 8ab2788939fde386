//! Storage access for accounts.
//!
//! [`AccountRepository`] exposes the raw queries against the `Users` table;
//! translating their outcomes into [`AppError`](q2bank_core::AppError)s is
//! the service's job. [`PgAccountRepository`] is the production
//! implementation. With the `test-utils` feature an in-memory implementation
//! is also available.

use async_trait::async_trait;
use q2bank_models::{AccountCredentials, NewAccount};
use sqlx::PgPool;

#[async_trait]
pub trait AccountRepository: Send + Sync + std::fmt::Debug {
    /// Id of an account sharing `email` or `cpf_cnpj`, if any.
    async fn find_conflicting(
        &self,
        email: &str,
        cpf_cnpj: &str,
    ) -> Result<Option<i32>, sqlx::Error>;

    async fn insert(&self, account: &NewAccount) -> Result<(), sqlx::Error>;

    /// First account registered with `email`.
    async fn find_by_email(&self, email: &str) -> Result<Option<AccountCredentials>, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgAccountRepository {
    db: PgPool,
}

impl PgAccountRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn find_conflicting(
        &self,
        email: &str,
        cpf_cnpj: &str,
    ) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, i32>(
            r#"SELECT id FROM public."Users" WHERE email = $1 OR cpf_cnpj = $2 LIMIT 1"#,
        )
        .bind(email)
        .bind(cpf_cnpj)
        .fetch_optional(&self.db)
        .await
    }

    async fn insert(&self, account: &NewAccount) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"INSERT INTO public."Users" (email, password, cpf_cnpj, name, user_type)
               VALUES ($1, $2, $3, $4, $5)"#,
        )
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(&account.cpf_cnpj)
        .bind(&account.name)
        .bind(account.user_type.as_str())
        .execute(&self.db)
        .await?;

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AccountCredentials>, sqlx::Error> {
        sqlx::query_as::<_, AccountCredentials>(
            r#"SELECT id, password, user_type FROM public."Users" WHERE email = $1 ORDER BY id LIMIT 1"#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use in_memory::InMemoryAccountRepository;

#[cfg(any(test, feature = "test-utils"))]
mod in_memory {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use async_trait::async_trait;
    use q2bank_models::{AccountCredentials, NewAccount};
    use tokio::sync::Mutex;

    use super::AccountRepository;

    #[derive(Debug, Clone)]
    struct StoredAccount {
        id: i32,
        account: NewAccount,
    }

    /// Vec-backed repository for tests.
    ///
    /// Counts inserts and can be switched into a failing mode where every
    /// call returns a storage error.
    #[derive(Debug, Default)]
    pub struct InMemoryAccountRepository {
        accounts: Mutex<Vec<StoredAccount>>,
        insert_calls: AtomicUsize,
        failing: AtomicBool,
    }

    impl InMemoryAccountRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn insert_calls(&self) -> usize {
            self.insert_calls.load(Ordering::SeqCst)
        }

        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        pub async fn len(&self) -> usize {
            self.accounts.lock().await.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.accounts.lock().await.is_empty()
        }

        /// Stored password hash of the first account with `email`.
        pub async fn password_hash(&self, email: &str) -> Option<String> {
            self.accounts
                .lock()
                .await
                .iter()
                .find(|stored| stored.account.email == email)
                .map(|stored| stored.account.password_hash.clone())
        }

        fn check_failing(&self) -> Result<(), sqlx::Error> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(sqlx::Error::PoolTimedOut);
            }
            Ok(())
        }
    }

    #[async_trait]
    impl AccountRepository for InMemoryAccountRepository {
        async fn find_conflicting(
            &self,
            email: &str,
            cpf_cnpj: &str,
        ) -> Result<Option<i32>, sqlx::Error> {
            self.check_failing()?;
            Ok(self
                .accounts
                .lock()
                .await
                .iter()
                .find(|stored| stored.account.email == email || stored.account.cpf_cnpj == cpf_cnpj)
                .map(|stored| stored.id))
        }

        async fn insert(&self, account: &NewAccount) -> Result<(), sqlx::Error> {
            self.insert_calls.fetch_add(1, Ordering::SeqCst);
            self.check_failing()?;

            let mut accounts = self.accounts.lock().await;
            let id = accounts.len() as i32 + 1;
            accounts.push(StoredAccount {
                id,
                account: account.clone(),
            });
            Ok(())
        }

        async fn find_by_email(
            &self,
            email: &str,
        ) -> Result<Option<AccountCredentials>, sqlx::Error> {
            self.check_failing()?;
            Ok(self
                .accounts
                .lock()
                .await
                .iter()
                .find(|stored| stored.account.email == email)
                .map(|stored| AccountCredentials {
                    id: stored.id,
                    password: stored.account.password_hash.clone(),
                    user_type: stored.account.user_type.as_str().to_string(),
                }))
        }
    }
}
