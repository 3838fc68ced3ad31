table! {
    food_data (id) {
        id -> Integer,
        name -> Text,
        calories -> Double,
        proteins -> Double,
        classification -> Text,
    }
}
