//! Relational schema for the normalized code.
//!
//! One statement batch, safe to run on every open. Structure-node
//! uniqueness is enforced with two partial indexes because SQLite treats
//! NULLs as distinct in a plain UNIQUE constraint, which would let
//! duplicate root units slip through.

/// Full schema DDL, idempotent.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS structure (
    id          INTEGER PRIMARY KEY,
    number      TEXT NOT NULL,
    name        TEXT,
    label       TEXT NOT NULL,
    parent_id   INTEGER REFERENCES structure(id),
    created_at  TEXT NOT NULL
);

CREATE UNIQUE INDEX IF NOT EXISTS structure_root_number
    ON structure(number) WHERE parent_id IS NULL;

CREATE UNIQUE INDEX IF NOT EXISTS structure_number_parent
    ON structure(number, parent_id) WHERE parent_id IS NOT NULL;

CREATE TABLE IF NOT EXISTS laws (
    id           INTEGER PRIMARY KEY,
    structure_id INTEGER REFERENCES structure(id),
    catch_line   TEXT NOT NULL,
    section      TEXT NOT NULL UNIQUE,
    text         TEXT NOT NULL,
    order_by     TEXT,
    history      TEXT,
    created_at   TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS text_blocks (
    id          INTEGER PRIMARY KEY,
    law_id      INTEGER NOT NULL REFERENCES laws(id),
    sequence    INTEGER NOT NULL,
    text        TEXT NOT NULL,
    type        TEXT NOT NULL,
    created_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS text_blocks_law
    ON text_blocks(law_id, sequence);

CREATE TABLE IF NOT EXISTS text_block_prefixes (
    text_block_id INTEGER NOT NULL REFERENCES text_blocks(id),
    identifier    TEXT NOT NULL,
    sequence      INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS text_block_prefixes_block
    ON text_block_prefixes(text_block_id, sequence);

CREATE TABLE IF NOT EXISTS laws_references (
    law_id                 INTEGER NOT NULL REFERENCES laws(id),
    target_section_number  TEXT NOT NULL,
    mentions               INTEGER NOT NULL,
    created_at             TEXT NOT NULL,
    UNIQUE (law_id, target_section_number)
);

CREATE TABLE IF NOT EXISTS dictionary (
    id                INTEGER PRIMARY KEY,
    law_id            INTEGER NOT NULL REFERENCES laws(id),
    term              TEXT NOT NULL,
    definition        TEXT NOT NULL,
    scope             TEXT NOT NULL,
    scope_specificity INTEGER NOT NULL,
    structure_id      INTEGER REFERENCES structure(id),
    created_at        TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS dictionary_law
    ON dictionary(law_id);
";
