use sqlx::SqliteConnection;

use crate::{
    db_types::{Country, NewCountry},
    traits::AdminApiError,
};

pub async fn count_countries(conn: &mut SqliteConnection) -> Result<i64, AdminApiError> {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM countries").fetch_one(conn).await?;
    Ok(total)
}

pub async fn fetch_countries(limit: i64, offset: i64, conn: &mut SqliteConnection) -> Result<Vec<Country>, AdminApiError> {
    let countries = sqlx::query_as::<_, Country>(
        "SELECT code, name, continent_name FROM countries ORDER BY code LIMIT ? OFFSET ?",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(conn)
    .await?;
    Ok(countries)
}

pub async fn create_country(country: &NewCountry, conn: &mut SqliteConnection) -> Result<Country, AdminApiError> {
    let res = sqlx::query("INSERT INTO countries (name, continent_name) VALUES (?, ?)")
        .bind(&country.name)
        .bind(&country.continent_name)
        .execute(conn)
        .await?;
    Ok(Country {
        code: res.last_insert_rowid(),
        name: country.name.clone(),
        continent_name: country.continent_name.clone(),
    })
}

pub async fn fetch_country(code: i64, conn: &mut SqliteConnection) -> Result<Option<Country>, AdminApiError> {
    let country = sqlx::query_as::<_, Country>("SELECT code, name, continent_name FROM countries WHERE code = ?")
        .bind(code)
        .fetch_optional(conn)
        .await?;
    Ok(country)
}

pub async fn update_country(code: i64, country: &NewCountry, conn: &mut SqliteConnection) -> Result<u64, AdminApiError> {
    let res = sqlx::query("UPDATE countries SET name = ?, continent_name = ? WHERE code = ?")
        .bind(&country.name)
        .bind(&country.continent_name)
        .bind(code)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

pub async fn delete_country(code: i64, conn: &mut SqliteConnection) -> Result<u64, AdminApiError> {
    let res = sqlx::query("DELETE FROM countries WHERE code = ?").bind(code).execute(conn).await?;
    Ok(res.rows_affected())
}
