//! One-time demonstration content for an empty store.

use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};

use super::entity::{author, category, post};

struct PostFixture {
    title: &'static str,
    slug: &'static str,
    excerpt: &'static str,
    content: &'static str,
    image: &'static str,
    category_slug: &'static str,
    rating: f64,
    views: i32,
    created_at: &'static str,
}

const CATEGORIES: &[(&str, &str)] = &[
    ("Notícias", "news"),
    ("Reviews", "reviews"),
    ("Recomendações", "recommendations"),
    ("Mangá", "manga"),
    ("Curiosidades", "trivia"),
];

const POSTS: &[PostFixture] = &[
    PostFixture {
        title: "Os Melhores Animes da Temporada de Inverno 2026",
        slug: "melhores-animes-inverno-2026",
        excerpt: "Confira nossa lista completa com os destaques que você não pode perder nesta temporada fria.",
        content: "A temporada de inverno chegou com tudo! Tivemos grandes estreias e continuações aguardadas. O destaque vai para a nova temporada de \"Cyber Samurai\" e o slice-of-life \"Coffee & Cats\". A animação está impecável e as trilhas sonoras emocionantes. Se você gosta de ação, não perca \"Mecha Horizon\". Para os românticos, \"Winter Love\" é a pedida certa.",
        image: "https://picsum.photos/seed/anime1/800/400",
        category_slug: "recommendations",
        rating: 4.8,
        views: 1250,
        created_at: "2026-01-15 10:00:00",
    },
    PostFixture {
        title: "Novo Capítulo de One Piece Choca Fãs",
        slug: "one-piece-novo-capitulo",
        excerpt: "Oda sensei fez de novo! Revelações bombásticas sobre o Século Perdido mudam tudo.",
        content: "O capítulo desta semana de One Piece trouxe informações cruciais que os fãs teorizavam há anos. A conexão entre Joy Boy e o Governo Mundial ficou mais clara, mas novas perguntas surgiram. Cuidado com spoilers abaixo! A narrativa visual de Oda continua suprema, com painéis duplos de tirar o fôlego.",
        image: "https://picsum.photos/seed/onepiece/800/400",
        category_slug: "manga",
        rating: 5.0,
        views: 5430,
        created_at: "2026-02-20 14:30:00",
    },
    PostFixture {
        title: "Top 10 Animes para Iniciantes",
        slug: "top-10-iniciantes",
        excerpt: "Nunca assistiu anime? Comece por aqui! Uma lista curada para todos os gostos.",
        content: "Entrar no mundo dos animes pode ser intimidador. Por isso, separamos clássicos modernos que são portas de entrada perfeitas. Death Note para quem gosta de suspense, Fullmetal Alchemist: Brotherhood para aventura épica, e Haikyuu!! para quem curte esportes e superação.",
        image: "https://picsum.photos/seed/beginners/800/400",
        category_slug: "recommendations",
        rating: 4.5,
        views: 3200,
        created_at: "2026-02-10 09:15:00",
    },
    PostFixture {
        title: "Estúdio Ghibli Anuncia Novo Filme",
        slug: "ghibli-novo-filme",
        excerpt: "Miyazaki sai da aposentadoria (de novo) para um projeto misterioso.",
        content: "O lendário Hayao Miyazaki está trabalhando em um novo longa-metragem. Detalhes são escassos, mas rumores apontam para uma aventura de fantasia com forte mensagem ambiental, marca registrada do diretor. A expectativa é alta!",
        image: "https://picsum.photos/seed/ghibli/800/400",
        category_slug: "news",
        rating: 4.9,
        views: 8900,
        created_at: "2026-02-21 11:00:00",
    },
    PostFixture {
        title: "Review: Solo Leveling - A Adaptação",
        slug: "review-solo-leveling",
        excerpt: "A espera acabou. O anime faz jus ao manhwa lendário? Confira nossa análise.",
        content: "A A-1 Pictures entregou uma animação fluida e fiel ao material original. As cenas de luta de Jin-Woo são viscerais e a trilha sonora de Hiroyuki Sawano eleva a tensão. Alguns cortes na história foram necessários, mas o ritmo se mantém frenético.",
        image: "https://picsum.photos/seed/solo/800/400",
        category_slug: "reviews",
        rating: 4.7,
        views: 4100,
        created_at: "2026-01-20 16:45:00",
    },
];

/// Populate the store with demonstration content if it is empty.
///
/// Gated on the posts table, so running it again is a no-op.
pub async fn seed_demo_content(db: &DbConn) -> Result<(), DbErr> {
    let existing = post::Entity::find().count(db).await?;
    if existing > 0 {
        tracing::debug!("Posts already present, skipping seed");
        return Ok(());
    }

    tracing::info!("Seeding demonstration content...");

    let txn = db.begin().await?;

    for (name, slug) in CATEGORIES {
        category::ActiveModel {
            name: Set((*name).to_string()),
            slug: Set((*slug).to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    let chief = author::ActiveModel {
        name: Set("Otaku Chief".to_string()),
        role: Set(Some("Editor Chefe".to_string())),
        avatar: Set(Some("https://picsum.photos/seed/akira/100/100".to_string())),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    for fixture in POSTS {
        let cat = category::Entity::find()
            .filter(category::Column::Slug.eq(fixture.category_slug))
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::Custom(format!("seed category missing: {}", fixture.category_slug)))?;

        let created_at = NaiveDateTime::parse_from_str(fixture.created_at, "%Y-%m-%d %H:%M:%S")
            .map_err(|e| DbErr::Custom(format!("seed timestamp invalid: {e}")))?
            .and_utc();

        post::ActiveModel {
            title: Set(fixture.title.to_string()),
            slug: Set(fixture.slug.to_string()),
            excerpt: Set(fixture.excerpt.to_string()),
            content: Set(fixture.content.to_string()),
            image: Set(fixture.image.to_string()),
            category_id: Set(cat.id),
            author_id: Set(chief.id),
            created_at: Set(created_at),
            rating: Set(fixture.rating),
            views: Set(fixture.views),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    tracing::info!(posts = POSTS.len(), "Demonstration content seeded");
    Ok(())
}
