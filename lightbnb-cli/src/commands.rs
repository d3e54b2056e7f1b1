//! Subcommand handlers
//!
//! Each handler opens a pool, runs one operation, and prints JSON to stdout.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;

use lightbnb_db::{
    create_pool_with_options, NewProperty, NewUser, PropertySearch, PropertyStore, QueryService,
    DEFAULT_LIMIT,
};

use crate::config::DbConfig;

#[derive(Args, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommands,
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Fetch a user by email or id
    Get {
        #[arg(long, conflicts_with = "id", required_unless_present = "id")]
        email: Option<String>,
        #[arg(long)]
        id: Option<i32>,
    },
    /// Register a user (password must already be hashed)
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

#[derive(Args, Debug)]
pub struct ReservationsArgs {
    /// Guest user id
    pub guest_id: i32,

    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Case-insensitive part of the city name
    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub owner_id: Option<i32>,

    /// Minimum nightly price in whole currency units
    #[arg(long)]
    pub min_price: Option<i64>,

    /// Maximum nightly price in whole currency units
    #[arg(long)]
    pub max_price: Option<i64>,

    /// Minimum average review rating
    #[arg(long)]
    pub min_rating: Option<f64>,

    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,
}

impl SearchArgs {
    pub fn to_search(&self) -> PropertySearch {
        PropertySearch {
            city: self.city.clone(),
            owner_id: self.owner_id,
            minimum_price_per_night: self.min_price,
            maximum_price_per_night: self.max_price,
            minimum_rating: self.min_rating,
        }
    }
}

#[derive(Args, Debug)]
pub struct PropertyArgs {
    #[command(subcommand)]
    pub command: PropertyCommands,
}

#[derive(Subcommand, Debug)]
pub enum PropertyCommands {
    /// Create a property listing
    Add(NewPropertyArgs),
}

#[derive(Args, Debug)]
pub struct NewPropertyArgs {
    #[arg(long)]
    pub owner_id: i32,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub thumbnail_photo_url: String,
    #[arg(long)]
    pub cover_photo_url: String,
    /// Nightly price in cents
    #[arg(long)]
    pub cost_per_night: i32,
    #[arg(long)]
    pub street: String,
    #[arg(long)]
    pub city: String,
    #[arg(long)]
    pub province: String,
    #[arg(long)]
    pub post_code: String,
    #[arg(long)]
    pub country: String,
    #[arg(long)]
    pub parking_spaces: i32,
    #[arg(long)]
    pub number_of_bathrooms: i32,
    #[arg(long)]
    pub number_of_bedrooms: i32,
}

impl From<NewPropertyArgs> for NewProperty {
    fn from(args: NewPropertyArgs) -> Self {
        Self {
            owner_id: args.owner_id,
            title: args.title,
            description: args.description,
            thumbnail_photo_url: args.thumbnail_photo_url,
            cover_photo_url: args.cover_photo_url,
            cost_per_night: args.cost_per_night,
            street: args.street,
            city: args.city,
            province: args.province,
            post_code: args.post_code,
            country: args.country,
            parking_spaces: args.parking_spaces,
            number_of_bathrooms: args.number_of_bathrooms,
            number_of_bedrooms: args.number_of_bedrooms,
        }
    }
}

async fn connect(config: &DbConfig) -> Result<QueryService> {
    let pool = create_pool_with_options(
        &config.database_url,
        config.max_connections,
        config.acquire_timeout(),
    )
    .await
    .with_context(|| format!("Failed to connect to {}", config.redacted_url()))?;

    Ok(QueryService::new(pool))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn run_user(config: &DbConfig, args: UserArgs) -> Result<()> {
    let service = connect(config).await?;

    match args.command {
        UserCommands::Get { email, id } => {
            let user = match (email, id) {
                (Some(email), _) => service.fetch_user_by_email(&email).await?,
                (None, Some(id)) => service.fetch_user_by_id(id).await?,
                (None, None) => bail!("either --email or --id is required"),
            };
            match user {
                Some(user) => print_json(&user),
                None => bail!("user not found"),
            }
        }
        UserCommands::Add {
            name,
            email,
            password,
        } => {
            let user = service
                .insert_user(&NewUser {
                    name,
                    email,
                    password,
                })
                .await?;
            tracing::info!(user_id = user.id, "user registered");
            print_json(&user)
        }
    }
}

pub async fn run_reservations(config: &DbConfig, args: ReservationsArgs) -> Result<()> {
    let service = connect(config).await?;
    let reservations = service
        .list_reservations_for_guest(args.guest_id, args.limit)
        .await?;

    if reservations.is_empty() {
        tracing::info!(guest_id = args.guest_id, "no reservations found");
    }
    print_json(&reservations)
}

pub async fn run_search(config: &DbConfig, args: SearchArgs) -> Result<()> {
    let service = connect(config).await?;
    let listings = service
        .search_properties(&args.to_search(), args.limit)
        .await?;

    if listings.is_empty() {
        tracing::info!("no matches found");
    }
    print_json(&listings)
}

pub async fn run_property(config: &DbConfig, args: PropertyArgs) -> Result<()> {
    let service = connect(config).await?;

    match args.command {
        PropertyCommands::Add(args) => {
            let property = service.insert_property(&args.into()).await?;
            tracing::info!(property_id = property.id, "property created");
            print_json(&property)
        }
    }
}
