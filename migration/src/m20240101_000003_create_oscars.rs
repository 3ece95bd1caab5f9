use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Oscars::Table)
                    .if_not_exists()
                    .col(pk_auto(Oscars::Id))
                    .col(string_len(Oscars::Nomination, 256))
                    .col(integer_null(Oscars::CeremonyYear))
                    .col(integer(Oscars::MovieId))
                    .col(integer_null(Oscars::ActorId))
                    .col(integer_null(Oscars::DirectorId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_oscars_movie")
                            .from(Oscars::Table, Oscars::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_oscars_actor")
                            .from(Oscars::Table, Oscars::ActorId)
                            .to(Actors::Table, Actors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_oscars_director")
                            .from(Oscars::Table, Oscars::DirectorId)
                            .to(Directors::Table, Directors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_oscars_ceremony_year")
                    .table(Oscars::Table)
                    .col(Oscars::CeremonyYear)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_oscars_movie_id")
                    .table(Oscars::Table)
                    .col(Oscars::MovieId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Oscars::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Actors {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Directors {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Oscars {
    Table,
    Id,
    Nomination,
    CeremonyYear,
    MovieId,
    ActorId,
    DirectorId,
}
