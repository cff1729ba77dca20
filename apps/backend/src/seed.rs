//! Sample catalogue of well-known cities and an idempotent seeder.
//!
//! Cities are matched by exact name; a name already in the table is
//! skipped, so running the seeder twice inserts nothing the second time.

use sea_orm::{ConnectionTrait, TransactionTrait};
use tracing::info;

use crate::domain::{CityDraft, NewCity};
use crate::error::AppError;
use crate::repos::cities as cities_repo;

pub const SEED_BATCH_SIZE: usize = 25;

/// (name, state, country, rating, founded, population)
const CATALOGUE: &[(&str, &str, &str, i64, &str, i64)] = &[
    ("New York", "New York", "United States", 5, "1624-01-01T00:00:00.000Z", 8_419_000),
    ("Los Angeles", "California", "United States", 5, "1781-04-04T00:00:00.000Z", 3_979_000),
    ("Chicago", "Illinois", "United States", 4, "1833-03-04T00:00:00.000Z", 2_746_000),
    ("Houston", "Texas", "United States", 4, "1836-06-05T00:00:00.000Z", 2_305_000),
    ("Phoenix", "Arizona", "United States", 4, "1881-02-25T00:00:00.000Z", 1_608_000),
    ("Philadelphia", "Pennsylvania", "United States", 4, "1682-10-26T00:00:00.000Z", 1_584_000),
    ("San Antonio", "Texas", "United States", 4, "1718-05-01T00:00:00.000Z", 1_435_000),
    ("San Diego", "California", "United States", 5, "1769-07-16T00:00:00.000Z", 1_387_000),
    ("Dallas", "Texas", "United States", 4, "1841-02-02T00:00:00.000Z", 1_304_000),
    ("San Jose", "California", "United States", 4, "1777-08-29T00:00:00.000Z", 1_014_000),
    ("Toronto", "Ontario", "Canada", 5, "1793-01-01T00:00:00.000Z", 2_930_000),
    ("Montreal", "Quebec", "Canada", 5, "1642-01-01T00:00:00.000Z", 1_780_000),
    ("Vancouver", "British Columbia", "Canada", 5, "1886-04-06T00:00:00.000Z", 675_000),
    ("Mexico City", "Mexico City", "Mexico", 4, "1325-01-01T00:00:00.000Z", 9_209_000),
    ("Guadalajara", "Jalisco", "Mexico", 4, "1542-02-14T00:00:00.000Z", 1_307_000),
    ("São Paulo", "São Paulo", "Brazil", 4, "1554-01-25T00:00:00.000Z", 12_325_000),
    ("Rio de Janeiro", "Rio de Janeiro", "Brazil", 5, "1565-03-01T00:00:00.000Z", 6_719_000),
    ("Buenos Aires", "Buenos Aires", "Argentina", 5, "1536-02-02T00:00:00.000Z", 3_054_000),
    ("Lima", "Lima", "Peru", 4, "1535-01-18T00:00:00.000Z", 9_675_000),
    ("Bogotá", "Cundinamarca", "Colombia", 4, "1538-08-06T00:00:00.000Z", 7_413_000),
    ("Santiago", "Santiago Metropolitan", "Chile", 4, "1541-02-12T00:00:00.000Z", 5_545_000),
    ("Caracas", "Caracas", "Venezuela", 4, "1567-07-25T00:00:00.000Z", 2_980_000),
    ("London", "England", "United Kingdom", 5, "0043-01-01T00:00:00.000Z", 9_648_000),
    ("Paris", "Île-de-France", "France", 5, "-0250-01-01T00:00:00.000Z", 2_161_000),
    ("Berlin", "Berlin", "Germany", 5, "1237-01-01T00:00:00.000Z", 3_677_000),
    ("Madrid", "Madrid", "Spain", 5, "0865-01-01T00:00:00.000Z", 3_223_000),
    ("Rome", "Lazio", "Italy", 5, "-0753-04-21T00:00:00.000Z", 2_873_000),
    ("Amsterdam", "North Holland", "Netherlands", 5, "1275-01-01T00:00:00.000Z", 872_000),
    ("Vienna", "Vienna", "Austria", 5, "0001-01-01T00:00:00.000Z", 1_965_000),
    ("Prague", "Prague", "Czech Republic", 5, "0870-01-01T00:00:00.000Z", 1_309_000),
    ("Athens", "Attica", "Greece", 5, "-3400-01-01T00:00:00.000Z", 664_000),
    ("Stockholm", "Stockholm", "Sweden", 5, "1252-01-01T00:00:00.000Z", 975_000),
    ("Oslo", "Oslo", "Norway", 5, "1040-01-01T00:00:00.000Z", 697_000),
    ("Copenhagen", "Capital Region", "Denmark", 5, "1000-01-01T00:00:00.000Z", 794_000),
    ("Helsinki", "Uusimaa", "Finland", 5, "1550-01-01T00:00:00.000Z", 656_000),
    ("Dublin", "Leinster", "Ireland", 5, "0841-01-01T00:00:00.000Z", 554_000),
    ("Lisbon", "Lisbon", "Portugal", 5, "1147-01-01T00:00:00.000Z", 505_000),
    ("Brussels", "Brussels", "Belgium", 5, "0979-01-01T00:00:00.000Z", 1_210_000),
    ("Zurich", "Zurich", "Switzerland", 5, "0299-01-01T00:00:00.000Z", 415_000),
    ("Geneva", "Geneva", "Switzerland", 5, "1539-01-01T00:00:00.000Z", 202_000),
    ("Warsaw", "Masovian", "Poland", 4, "1230-01-01T00:00:00.000Z", 1_793_000),
    ("Budapest", "Budapest", "Hungary", 5, "0001-01-01T00:00:00.000Z", 1_749_000),
    ("Tokyo", "Kanto", "Japan", 5, "1457-01-01T00:00:00.000Z", 13_960_000),
    ("Jakarta", "Jakarta", "Indonesia", 4, "1527-06-22T00:00:00.000Z", 10_560_000),
    ("Delhi", "Delhi", "India", 4, "1618-01-01T00:00:00.000Z", 32_220_000),
    ("Manila", "Metro Manila", "Philippines", 4, "1571-05-19T00:00:00.000Z", 2_492_000),
    ("Seoul", "Seoul", "South Korea", 5, "1394-01-01T00:00:00.000Z", 9_776_000),
    ("Shanghai", "Shanghai", "China", 5, "1291-01-01T00:00:00.000Z", 27_790_000),
    ("Mumbai", "Maharashtra", "India", 4, "1507-01-01T00:00:00.000Z", 20_668_000),
    ("Beijing", "Beijing", "China", 5, "-1045-01-01T00:00:00.000Z", 21_540_000),
    ("Taipei", "Taipei", "Taiwan", 5, "1875-01-01T00:00:00.000Z", 2_646_000),
    ("Bangkok", "Bangkok", "Thailand", 5, "1782-01-01T00:00:00.000Z", 10_722_000),
    ("Singapore", "Singapore", "Singapore", 5, "1819-02-06T00:00:00.000Z", 5_886_000),
    ("Kuala Lumpur", "Kuala Lumpur", "Malaysia", 4, "1857-01-01T00:00:00.000Z", 1_780_000),
    ("Hanoi", "Hanoi", "Vietnam", 4, "1010-01-01T00:00:00.000Z", 8_050_000),
    ("Ho Chi Minh City", "Ho Chi Minh City", "Vietnam", 4, "1698-01-01T00:00:00.000Z", 9_050_000),
    ("Hong Kong", "Hong Kong", "Hong Kong", 5, "1842-01-01T00:00:00.000Z", 7_500_000),
    ("Dubai", "Dubai", "United Arab Emirates", 5, "1833-01-01T00:00:00.000Z", 3_331_000),
    ("Tel Aviv", "Tel Aviv", "Israel", 5, "1909-04-11T00:00:00.000Z", 451_000),
    ("Jerusalem", "Jerusalem", "Israel", 5, "-3000-01-01T00:00:00.000Z", 936_000),
    ("Tehran", "Tehran", "Iran", 4, "1598-01-01T00:00:00.000Z", 9_462_000),
    ("Baghdad", "Baghdad", "Iraq", 4, "0762-01-01T00:00:00.000Z", 7_665_000),
    ("Riyadh", "Riyadh", "Saudi Arabia", 4, "1744-01-01T00:00:00.000Z", 7_035_000),
    ("Kuwait City", "Kuwait", "Kuwait", 4, "1716-01-01T00:00:00.000Z", 623_000),
    ("Doha", "Doha", "Qatar", 4, "1825-01-01T00:00:00.000Z", 957_000),
    ("Muscat", "Muscat", "Oman", 4, "1749-01-01T00:00:00.000Z", 1_421_000),
    ("Amman", "Amman", "Jordan", 4, "1250-01-01T00:00:00.000Z", 4_007_000),
    ("Cairo", "Cairo", "Egypt", 5, "0969-01-01T00:00:00.000Z", 9_540_000),
    ("Lagos", "Lagos", "Nigeria", 4, "1472-01-01T00:00:00.000Z", 15_280_000),
    ("Kinshasa", "Kinshasa", "Democratic Republic of the Congo", 3, "1881-01-01T00:00:00.000Z", 17_070_000),
    ("Johannesburg", "Gauteng", "South Africa", 4, "1886-01-01T00:00:00.000Z", 5_635_000),
    ("Nairobi", "Nairobi", "Kenya", 4, "1899-01-01T00:00:00.000Z", 5_119_000),
    ("Addis Ababa", "Addis Ababa", "Ethiopia", 4, "1886-01-01T00:00:00.000Z", 3_041_000),
    ("Cape Town", "Western Cape", "South Africa", 5, "1652-04-06T00:00:00.000Z", 4_337_000),
    ("Dar es Salaam", "Dar es Salaam", "Tanzania", 4, "1865-01-01T00:00:00.000Z", 6_163_000),
    ("Abidjan", "Abidjan", "Ivory Coast", 4, "1700-01-01T00:00:00.000Z", 4_980_000),
    ("Casablanca", "Casablanca", "Morocco", 4, "1068-01-01T00:00:00.000Z", 3_767_000),
    ("Alexandria", "Alexandria", "Egypt", 5, "-0331-01-01T00:00:00.000Z", 5_150_000),
    ("Accra", "Greater Accra", "Ghana", 4, "1455-01-01T00:00:00.000Z", 2_500_000),
    ("Dakar", "Dakar", "Senegal", 4, "1450-01-01T00:00:00.000Z", 1_377_000),
    ("Khartoum", "Khartoum", "Sudan", 4, "1821-01-01T00:00:00.000Z", 5_490_000),
    ("Algiers", "Algiers", "Algeria", 4, "0970-01-01T00:00:00.000Z", 2_731_000),
    ("Sydney", "New South Wales", "Australia", 5, "1788-01-26T00:00:00.000Z", 5_312_000),
    ("Melbourne", "Victoria", "Australia", 5, "1835-01-01T00:00:00.000Z", 5_078_000),
    ("Brisbane", "Queensland", "Australia", 5, "1824-01-01T00:00:00.000Z", 2_514_000),
    ("Perth", "Western Australia", "Australia", 4, "1829-01-01T00:00:00.000Z", 2_059_000),
    ("Auckland", "Auckland", "New Zealand", 5, "1840-01-01T00:00:00.000Z", 1_657_000),
    ("Wellington", "Wellington", "New Zealand", 4, "1840-01-01T00:00:00.000Z", 418_000),
    ("Canberra", "Australian Capital Territory", "Australia", 4, "1913-01-01T00:00:00.000Z", 447_000),
    ("Moscow", "Moscow", "Russia", 5, "1147-01-01T00:00:00.000Z", 12_655_000),
    ("Saint Petersburg", "Saint Petersburg", "Russia", 5, "1703-05-27T00:00:00.000Z", 5_383_000),
    ("Istanbul", "Istanbul", "Turkey", 5, "0660-01-01T00:00:00.000Z", 15_030_000),
    ("Ankara", "Ankara", "Turkey", 4, "1300-01-01T00:00:00.000Z", 5_504_000),
    ("Barcelona", "Catalonia", "Spain", 5, "0001-01-01T00:00:00.000Z", 1_620_000),
    ("Munich", "Bavaria", "Germany", 5, "1158-01-01T00:00:00.000Z", 1_472_000),
    ("Frankfurt", "Hesse", "Germany", 4, "0794-01-01T00:00:00.000Z", 753_000),
    ("Hamburg", "Hamburg", "Germany", 4, "0808-01-01T00:00:00.000Z", 1_899_000),
    ("Milan", "Lombardy", "Italy", 5, "-0400-01-01T00:00:00.000Z", 1_398_000),
    ("Naples", "Campania", "Italy", 5, "-0008-01-01T00:00:00.000Z", 967_000),
    ("Osaka", "Osaka", "Japan", 5, "0794-01-01T00:00:00.000Z", 2_691_000),
    ("Yokohama", "Kanagawa", "Japan", 4, "1859-01-01T00:00:00.000Z", 3_726_000),
    ("Kyoto", "Kyoto", "Japan", 5, "0794-01-01T00:00:00.000Z", 1_465_000),
    ("Nagoya", "Aichi", "Japan", 4, "1610-01-01T00:00:00.000Z", 2_327_000),
    ("Sapporo", "Hokkaido", "Japan", 4, "1857-01-01T00:00:00.000Z", 1_963_000),
    ("Fukuoka", "Fukuoka", "Japan", 4, "0794-01-01T00:00:00.000Z", 1_616_000),
    ("Kobe", "Hyogo", "Japan", 4, "1889-01-01T00:00:00.000Z", 1_524_000),
    ("Hiroshima", "Hiroshima", "Japan", 4, "1589-01-01T00:00:00.000Z", 1_203_000),
    ("Sendai", "Miyagi", "Japan", 4, "1600-01-01T00:00:00.000Z", 1_083_000),
    ("Kitakyushu", "Fukuoka", "Japan", 3, "1963-01-01T00:00:00.000Z", 948_000),
    ("Chiba", "Chiba", "Japan", 3, "1921-01-01T00:00:00.000Z", 982_000),
    ("Sakai", "Osaka", "Japan", 3, "1889-01-01T00:00:00.000Z", 827_000),
    ("Hamamatsu", "Shizuoka", "Japan", 3, "1889-01-01T00:00:00.000Z", 791_000),
    ("Niigata", "Niigata", "Japan", 3, "1889-01-01T00:00:00.000Z", 790_000),
    ("San Francisco", "California", "United States", 5, "1776-06-29T00:00:00.000Z", 873_965),
    ("Boston", "Massachusetts", "United States", 4, "1630-09-17T00:00:00.000Z", 675_647),
    ("Edinburgh", "Scotland", "United Kingdom", 4, "1124-01-01T00:00:00.000Z", 506_520),
    ("Lyon", "Auvergne-Rhône-Alpes", "France", 4, "-0043-10-09T00:00:00.000Z", 522_969),
    ("Florence", "Tuscany", "Italy", 5, "-0059-01-01T00:00:00.000Z", 382_258),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: Vec<String>,
    pub skipped: Vec<String>,
}

/// The built-in catalogue, validated like any API create.
pub fn catalogue() -> Result<Vec<NewCity>, AppError> {
    CATALOGUE
        .iter()
        .map(|(name, state, country, rating, founded, population)| {
            CityDraft {
                name: Some(name.to_string()),
                state: Some(state.to_string()),
                country: Some(country.to_string()),
                tourist_rating: Some(*rating),
                date_established: Some(founded.to_string()),
                estimated_population: Some(*population),
            }
            .validate()
            .map_err(AppError::from)
        })
        .collect()
}

/// Split `cities` into those to insert and those whose name already exists.
pub async fn plan<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    cities: Vec<NewCity>,
) -> Result<(Vec<NewCity>, Vec<String>), AppError> {
    let names: Vec<String> = cities.iter().map(|c| c.name.clone()).collect();
    let existing = cities_repo::existing_names(conn, &names).await?;

    let (skip, insert): (Vec<NewCity>, Vec<NewCity>) =
        cities.into_iter().partition(|c| existing.contains(&c.name));
    Ok((insert, skip.into_iter().map(|c| c.name).collect()))
}

/// Insert the missing cities in batches; each batch commits on its own.
pub async fn seed<C>(conn: &C, cities: Vec<NewCity>, dry_run: bool) -> Result<SeedReport, AppError>
where
    C: ConnectionTrait + TransactionTrait + Send + Sync,
{
    let (to_insert, skipped) = plan(conn, cities).await?;
    let inserted: Vec<String> = to_insert.iter().map(|c| c.name.clone()).collect();

    if dry_run {
        info!(would_insert = inserted.len(), skipped = skipped.len(), "seed dry run");
        return Ok(SeedReport { inserted, skipped });
    }

    let mut batches = 0usize;
    let mut remaining = to_insert;
    while !remaining.is_empty() {
        let rest = remaining.split_off(remaining.len().min(SEED_BATCH_SIZE));
        let txn = conn.begin().await?;
        cities_repo::insert_cities(&txn, remaining).await?;
        txn.commit().await?;
        batches += 1;
        remaining = rest;
    }

    info!(inserted = inserted.len(), skipped = skipped.len(), batches, "seed complete");
    Ok(SeedReport { inserted, skipped })
}
