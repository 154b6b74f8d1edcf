//! Literal defaults for the store slots.
//!
//! These values are baked into the binary and used to populate every new
//! `FixtureStore`. They stand in for data that would otherwise come from a
//! directory service and a document extraction pipeline.

use crate::models::{
    Address, ClaimDocument, ClaimSummary, Company, Geo, Insured, LineOfBusiness, LossEntry,
    LossSummary, LossTotals, UserRecord,
};

/// Default users, ordered by id.
pub fn default_users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: 1,
            name: "Leanne Graham".into(),
            username: "Bret".into(),
            email: "Sincere@april.biz".into(),
            address: Address {
                street: "Kulas Light".into(),
                suite: "Apt. 556".into(),
                city: "Gwenborough".into(),
                zipcode: "92998-3874".into(),
                geo: Geo {
                    lat: "-37.3159".into(),
                    lng: "81.1496".into(),
                },
            },
            phone: "1-770-736-8031 x56442".into(),
            website: "hildegard.org".into(),
            company: Company {
                name: "Romaguera-Crona".into(),
                catch_phrase: "Multi-layered client-server neural-net".into(),
                bs: "harness real-time e-markets".into(),
            },
        },
        UserRecord {
            id: 2,
            name: "Ervin Howell".into(),
            username: "Antonette".into(),
            email: "Shanna@melissa.tv".into(),
            address: Address {
                street: "Victor Plains".into(),
                suite: "Suite 879".into(),
                city: "Wisokyburgh".into(),
                zipcode: "90566-7771".into(),
                geo: Geo {
                    lat: "-43.9509".into(),
                    lng: "-34.4618".into(),
                },
            },
            phone: "010-692-6593 x09125".into(),
            website: "anastasia.net".into(),
            company: Company {
                name: "Deckow-Crist".into(),
                catch_phrase: "Proactive didactic contingency".into(),
                bs: "synergize scalable supply-chains".into(),
            },
        },
        UserRecord {
            id: 3,
            name: "Clementine Bauch".into(),
            username: "Samantha".into(),
            email: "Nathan@yesenia.net".into(),
            address: Address {
                street: "Douglas Extension".into(),
                suite: "Suite 8470".into(),
                city: "South Elvis".into(),
                zipcode: "51902-6430".into(),
                geo: Geo {
                    lat: "-14.3990".into(),
                    lng: "-120.7896".into(),
                },
            },
            phone: "1-463-123-4447".into(),
            website: "ramiro.info".into(),
            company: Company {
                name: "Romaguera-Jacobson".into(),
                catch_phrase: "Multi-layered client-server neural-net".into(),
                bs: "transition on uhd-mgmt".into(),
            },
        },
    ]
}

/// Default claim summary extracted from an email body.
pub fn default_claim_document() -> ClaimDocument {
    ClaimDocument {
        response_body: ClaimSummary {
            document_type: "Email body".into(),
            insured: Insured {
                name: "John Doe".into(),
                policy_no: "1234567890".into(),
                insured_no: "9876543210".into(),
            },
            line_of_business: LineOfBusiness {
                line_of_business: "Life Insurance".into(),
            },
            losses: LossSummary {
                totals: LossTotals {
                    total_incurred: "$1,000,000".into(),
                    total_paid: "$500,000".into(),
                },
                losses: vec![
                    LossEntry {
                        claimant_name: "Jane Doe".into(),
                        loss_date: "2022-12-31".into(),
                        total_incurred: "$500,000".into(),
                        total_paid: "$200,000".into(),
                    },
                    LossEntry {
                        claimant_name: "John Doe".into(),
                        loss_date: "2023-12-31".into(),
                        total_incurred: "$730,000".into(),
                        total_paid: "$120,000".into(),
                    },
                ],
            },
        },
    }
}
