///////////////////////////////////////////////////////////////////////
// Addresses
///////////////////////////////////////////////////////////////////////

table! {
    addresses (id) {
        id -> BigInt,
        street -> Text,
        city -> Text,
        state -> Text,
        country -> Text,
        lat -> Double,
        lng -> Double,
    }
}
