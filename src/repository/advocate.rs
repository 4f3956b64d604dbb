use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Text};
use diesel::sqlite::Sqlite;

use crate::db::{DbPool, get_connection};
use crate::domain::advocate::{Advocate, NewAdvocate};
use crate::repository::errors::RepositoryResult;
use crate::repository::{AdvocateListQuery, AdvocateReader, AdvocateWriter};
use crate::schema::advocates;

/// Diesel implementation of [`AdvocateReader`] and [`AdvocateWriter`].
pub struct DieselAdvocateRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselAdvocateRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

/// Builds the shared filter so the page query and the count query always
/// agree on which rows match.
///
/// SQLite `LIKE` is case-insensitive for ASCII, which gives the substring
/// match the same semantics as `ILIKE`. The phone number is a numeric
/// column, so it is cast to text before matching; specialties are matched
/// against their serialized JSON text, not per element.
fn filtered(query: &AdvocateListQuery) -> advocates::BoxedQuery<'static, Sqlite> {
    let mut filtered = advocates::table.into_boxed();

    if let Some(term) = &query.search {
        let pattern = format!("%{term}%");
        filtered = filtered.filter(
            advocates::first_name
                .like(pattern.clone())
                .or(advocates::last_name.like(pattern.clone()))
                .or(advocates::city.like(pattern.clone()))
                .or(advocates::degree.like(pattern.clone()))
                .or(advocates::specialties.like(pattern.clone()))
                .or(sql::<Bool>("CAST(phone_number AS TEXT) LIKE ").bind::<Text, _>(pattern)),
        );
    }

    if let Some(min_years) = query.min_years {
        filtered = filtered.filter(advocates::years_of_experience.ge(min_years));
    }

    filtered
}

impl AdvocateReader for DieselAdvocateRepository<'_> {
    fn get_advocate_by_id(&self, id: i32) -> RepositoryResult<Option<Advocate>> {
        use crate::models::advocate::Advocate as DbAdvocate;

        let mut conn = get_connection(self.pool)?;
        let advocate = advocates::table
            .find(id)
            .first::<DbAdvocate>(&mut conn)
            .optional()?;

        Ok(advocate.map(Into::into))
    }

    fn list_advocates(&self, query: AdvocateListQuery) -> RepositoryResult<(usize, Vec<Advocate>)> {
        use crate::models::advocate::Advocate as DbAdvocate;

        let mut conn = get_connection(self.pool)?;

        let total: i64 = filtered(&query).count().get_result(&mut conn)?;

        let mut items_query = filtered(&query).order(advocates::id.asc());
        if let Some(pagination) = &query.pagination {
            let per_page = pagination.per_page as i64;
            let offset = (pagination.page as i64 - 1) * per_page;
            items_query = items_query.limit(per_page).offset(offset);
        }

        let items = items_query
            .load::<DbAdvocate>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Advocate>>();

        Ok((total as usize, items))
    }
}

impl AdvocateWriter for DieselAdvocateRepository<'_> {
    fn create_advocates(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<usize> {
        use crate::models::advocate::NewAdvocate as DbNewAdvocate;

        let mut conn = get_connection(self.pool)?;
        let insertables: Vec<DbNewAdvocate> = new_advocates.iter().map(Into::into).collect();
        let affected = diesel::insert_into(advocates::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
