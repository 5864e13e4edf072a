mod callback_bridge;
