mod travel_behavior_tests;
