use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use q2bank::cli::{check_transaction_auth, create_account, migrate};
use q2bank::modules::accounts::repository::PgAccountRepository;
use q2bank_config::{DatabaseConfig, PasswordPolicy, TransactionAuthConfig};
use q2bank_db::{PgPool, init_db_pool};
use q2bank_models::CreateAccountRequest;

#[derive(Parser)]
#[command(name = "q2bank-cli")]
#[command(about = "q2bank CLI - Administrative tools for the q2bank account API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Register an account directly against the database
    CreateAccount {
        /// Email address
        #[arg(short = 'e', long)]
        email: String,

        /// Password (checked against the configured password policy)
        #[arg(short = 'p', long)]
        password: String,

        /// CPF or CNPJ document number
        #[arg(short = 'c', long)]
        cpf_cnpj: String,

        /// Display name
        #[arg(short = 'n', long)]
        name: String,

        /// Account type: person or store
        #[arg(short = 't', long, default_value = "person")]
        user_type: String,
    },
    /// Query the external transaction authorization endpoint
    TransactionAuth,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate => {
            let pool = connect().await;
            match migrate(&pool).await {
                Ok(()) => println!("Migrations applied"),
                Err(e) => fail("Error running migrations", e),
            }
        }
        Commands::CreateAccount {
            email,
            password,
            cpf_cnpj,
            name,
            user_type,
        } => {
            let pool = connect().await;
            let repo = PgAccountRepository::new(pool);
            let dto = CreateAccountRequest {
                email: email.clone(),
                password,
                cpf_cnpj,
                name,
                user_type,
            };

            match create_account(&repo, &PasswordPolicy::from_env(), dto).await {
                Ok(()) => {
                    println!("Account created");
                    println!("   Email: {}", email);
                }
                Err(e) => fail("Error creating account", e.message()),
            }
        }
        Commands::TransactionAuth => {
            let config = TransactionAuthConfig::from_env();
            match check_transaction_auth(&config).await {
                Ok(authorized) => println!("authorization: {}", authorized),
                Err(e) => fail("Error checking transaction authorization", e.message()),
            }
        }
    }
}

async fn connect() -> PgPool {
    let config = match DatabaseConfig::from_env() {
        Ok(config) => config,
        Err(_) => fail("DATABASE_URL must be set", "missing environment variable"),
    };

    match init_db_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => fail("Failed to connect to database", e),
    }
}

fn fail(context: &str, error: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", context, error);
    std::process::exit(1);
}
